//! Application Service Port Interfaces

use async_trait::async_trait;
use nsync_domain::NotificationScope;
use tokio::sync::watch;

use crate::state::{NotificationState, SyncOutcome};

// ============================================================================
// Notification Sync Service Interface
// ============================================================================

/// Notification Sync Service Interface
///
/// Consumer-facing surface of the synchronizer: read-only snapshots plus the
/// operations that reconcile the local view with the remote service. None of
/// the operations return an error; failures land in
/// [`NotificationState::error`].
#[async_trait]
pub trait NotificationSyncServiceInterface: Send + Sync {
    /// Clone of the current state
    fn snapshot(&self) -> NotificationState;

    /// Receiver that observes every committed state replacement
    fn subscribe(&self) -> watch::Receiver<NotificationState>;

    /// Replace the local view with the server's active alerts for `scope`
    async fn fetch(&self, scope: &NotificationScope) -> SyncOutcome;

    /// Forced reconciliation point; same semantics as [`Self::fetch`]
    async fn refresh(&self, scope: &NotificationScope) -> SyncOutcome;

    /// Mark one alert read once the server confirms
    async fn mark_read(&self, notification_id: &str) -> SyncOutcome;

    /// Dismiss one alert once the server confirms
    async fn dismiss(&self, notification_id: &str) -> SyncOutcome;

    /// Dismiss every alert of `user_id` matching `kind` (`None` means all)
    async fn dismiss_all(&self, user_id: &str, kind: Option<&str>) -> SyncOutcome;

    /// Read every alert of `user_id` matching `kind` (`None` means all)
    async fn mark_all_read(&self, user_id: &str, kind: Option<&str>) -> SyncOutcome;

    /// Trigger server-side deadline alert generation, then fetch
    async fn generate_deadline_alerts(&self, scope: &NotificationScope) -> SyncOutcome;

    /// Trigger server-side compliance alert generation, then fetch
    async fn generate_compliance_alerts(&self, scope: &NotificationScope) -> SyncOutcome;

    /// Drop all local state (sign-out)
    fn reset(&self);
}
