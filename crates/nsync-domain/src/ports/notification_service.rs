//! Notification Service Port
//!
//! Contract of the remote notification service. Implementations live in
//! `nsync-providers` (HTTP, in-memory).
//!
//! ## Failure contract
//!
//! - `Err(_)` means the call did not complete (unreachable, transport
//!   error, non-success status, timeout). It is the implementation's job to
//!   fail within its own timeout policy.
//! - `Ok(Ack { success: false, .. })` means the service answered but did not
//!   commit the change. Callers must treat it as "no state change".

use crate::error::Result;
use crate::value_objects::{Ack, BulkUpdate, ListQuery, NotificationList, NotificationScope};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote notification service port
///
/// # Example
///
/// ```ignore
/// use nsync_domain::{ListQuery, NotificationScope, NotificationServiceProvider};
///
/// let list = service
///     .list(&NotificationScope::user("user-1"), ListQuery::default())
///     .await?;
/// println!("{} unread", list.unread_count);
/// ```
#[async_trait]
pub trait NotificationServiceProvider: Send + Sync {
    /// List alerts for a scope
    async fn list(&self, scope: &NotificationScope, query: ListQuery) -> Result<NotificationList>;

    /// Mark one alert read
    async fn mark_read(&self, notification_id: &str) -> Result<Ack>;

    /// Dismiss one alert
    async fn dismiss(&self, notification_id: &str) -> Result<Ack>;

    /// Apply an action to every alert of a user matching an optional kind
    async fn bulk_update(&self, request: &BulkUpdate) -> Result<Ack>;

    /// Ask the service to generate deadline alerts for a scope
    async fn generate_deadline_alerts(&self, scope: &NotificationScope) -> Result<Ack>;

    /// Ask the service to generate compliance alerts for a scope
    async fn generate_compliance_alerts(&self, scope: &NotificationScope) -> Result<Ack>;

    /// Name of this implementation (e.g. "http", "in_memory")
    fn provider_name(&self) -> &str;
}

/// Shared notification service for dependency injection
pub type SharedNotificationService = Arc<dyn NotificationServiceProvider>;
