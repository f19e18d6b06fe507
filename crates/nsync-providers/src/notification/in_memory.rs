//! In-memory notification service
//!
//! Provides a server-side alert store for development and testing. Data is
//! not persisted and will be lost on restart.
//!
//! Behaves like the remote service: list filtering by scope and flags,
//! idempotent read/dismiss, bulk updates, and alert generation from a queue
//! of prepared alerts. Failures can be injected per call.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use nsync_domain::constants::{ALERT_KIND_COMPLIANCE, ALERT_KIND_DEADLINE};
use nsync_domain::entities::{Notification, Severity};
use nsync_domain::error::{Error, Result};
use nsync_domain::ports::NotificationServiceProvider;
use nsync_domain::value_objects::{
    Ack, BulkAction, BulkUpdate, ListQuery, NotificationList, NotificationScope,
};

use crate::constants::PROVIDER_IN_MEMORY;

/// Failure returned by the next call instead of its real result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectedFailure {
    /// The call errors as if the service were unreachable
    Unreachable,
    /// The call resolves with `success: false` and this message
    ///
    /// `list` has no acknowledgement, so it errors instead.
    Reject(String),
}

#[derive(Default)]
struct Store {
    notifications: Vec<Notification>,
    pending_failures: VecDeque<InjectedFailure>,
    /// Failures reserved for list calls, consumed before the shared queue
    pending_list_failures: VecDeque<InjectedFailure>,
    /// Prepared alerts per kind, released by the matching generation call
    generation_queue: HashMap<String, Vec<Notification>>,
    calls: usize,
}

impl Store {
    fn find_mut(&mut self, notification_id: &str) -> Option<&mut Notification> {
        self.notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
    }

    fn take_failure(&mut self) -> Option<InjectedFailure> {
        self.calls += 1;
        self.pending_failures.pop_front()
    }

    fn take_list_failure(&mut self) -> Option<InjectedFailure> {
        match self.pending_list_failures.pop_front() {
            Some(failure) => {
                self.calls += 1;
                Some(failure)
            }
            None => self.take_failure(),
        }
    }
}

/// In-memory notification service
///
/// Stores alerts in server order behind an async lock. Cloning is not
/// supported; share it behind an `Arc`.
pub struct InMemoryNotificationService {
    store: RwLock<Store>,
}

impl InMemoryNotificationService {
    /// Create an empty service
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }

    /// Create a service holding `notifications` in the given order
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            store: RwLock::new(Store {
                notifications,
                ..Store::default()
            }),
        }
    }

    /// Build a fresh unread alert with a generated id
    pub fn new_alert(
        user_id: &str,
        kind: &str,
        severity: Severity,
        title: &str,
        message: &str,
    ) -> Notification {
        Notification::new(
            uuid::Uuid::new_v4().to_string(),
            user_id,
            kind,
            severity,
            title,
            message,
            Utc::now(),
        )
    }

    /// Append an alert to the server-side store
    pub async fn insert(&self, notification: Notification) {
        self.store.write().await.notifications.push(notification);
    }

    /// Remove an alert server-side (e.g. purged after expiry)
    pub async fn remove(&self, notification_id: &str) -> Option<Notification> {
        let mut store = self.store.write().await;
        let index = store
            .notifications
            .iter()
            .position(|n| n.id == notification_id)?;
        Some(store.notifications.remove(index))
    }

    /// Server-side copy of one alert
    pub async fn get(&self, notification_id: &str) -> Option<Notification> {
        self.store
            .read()
            .await
            .notifications
            .iter()
            .find(|n| n.id == notification_id)
            .cloned()
    }

    /// Server-side copy of every alert
    pub async fn all(&self) -> Vec<Notification> {
        self.store.read().await.notifications.clone()
    }

    /// Prepare an alert that the next generation call for its kind releases
    pub async fn queue_generated(&self, notification: Notification) {
        self.store
            .write()
            .await
            .generation_queue
            .entry(notification.kind.clone())
            .or_default()
            .push(notification);
    }

    /// Make the next call fail; successive injections apply to successive calls
    pub async fn fail_next(&self, failure: InjectedFailure) {
        self.store.write().await.pending_failures.push_back(failure);
    }

    /// Make the next list call fail, leaving other calls alone
    pub async fn fail_next_list(&self, failure: InjectedFailure) {
        self.store
            .write()
            .await
            .pending_list_failures
            .push_back(failure);
    }

    /// Number of port calls served so far
    pub async fn call_count(&self) -> usize {
        self.store.read().await.calls
    }

    async fn acknowledge<F>(&self, operation: &str, apply: F) -> Result<Ack>
    where
        F: FnOnce(&mut Store) -> Ack,
    {
        let mut store = self.store.write().await;
        match store.take_failure() {
            Some(InjectedFailure::Unreachable) => Err(Error::network(format!(
                "{operation}: notification service unreachable"
            ))),
            Some(InjectedFailure::Reject(message)) => Ok(Ack::rejected(message)),
            None => Ok(apply(&mut *store)),
        }
    }

    async fn generate(&self, kind: &str, scope: &NotificationScope) -> Result<Ack> {
        let operation = format!("generate {kind} alerts");
        self.acknowledge(&operation, |store| {
            let queued = store.generation_queue.remove(kind).unwrap_or_default();
            let (released, kept): (Vec<_>, Vec<_>) =
                queued.into_iter().partition(|n| in_scope(n, scope));
            if !kept.is_empty() {
                store.generation_queue.insert(kind.to_string(), kept);
            }
            debug!(kind, released = released.len(), "Generated alerts");
            store.notifications.extend(released);
            Ack::ok()
        })
        .await
    }
}

impl Default for InMemoryNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

fn in_scope(notification: &Notification, scope: &NotificationScope) -> bool {
    notification.user_id == scope.user_id
        && scope
            .entity_id
            .as_deref()
            .is_none_or(|entity_id| notification.entity_id.as_deref() == Some(entity_id))
}

fn not_found(notification_id: &str) -> Ack {
    Ack::rejected(format!("Notification not found: {notification_id}"))
}

#[async_trait]
impl NotificationServiceProvider for InMemoryNotificationService {
    async fn list(&self, scope: &NotificationScope, query: ListQuery) -> Result<NotificationList> {
        let mut store = self.store.write().await;
        match store.take_list_failure() {
            Some(InjectedFailure::Unreachable) => {
                return Err(Error::network("list: notification service unreachable"));
            }
            Some(InjectedFailure::Reject(message)) => {
                return Err(Error::network(format!("list: {message}")));
            }
            None => {}
        }

        let now = Utc::now();
        let notifications = store
            .notifications
            .iter()
            .filter(|n| in_scope(n, scope))
            .filter(|n| !query.unread_only || n.is_unread())
            .filter(|n| !query.active_only || (!n.is_dismissed() && !n.is_expired(now)))
            .cloned()
            .collect();
        Ok(NotificationList::from_notifications(notifications))
    }

    async fn mark_read(&self, notification_id: &str) -> Result<Ack> {
        self.acknowledge("mark_read", |store| {
            let now = Utc::now();
            match store.find_mut(notification_id) {
                Some(notification) => {
                    notification.mark_read(now);
                    Ack::ok()
                }
                None => not_found(notification_id),
            }
        })
        .await
    }

    async fn dismiss(&self, notification_id: &str) -> Result<Ack> {
        self.acknowledge("dismiss", |store| {
            let now = Utc::now();
            match store.find_mut(notification_id) {
                Some(notification) => {
                    notification.dismiss(now);
                    Ack::ok()
                }
                None => not_found(notification_id),
            }
        })
        .await
    }

    async fn bulk_update(&self, request: &BulkUpdate) -> Result<Ack> {
        self.acknowledge("bulk_update", |store| {
            let now = Utc::now();
            let mut updated = 0usize;
            for notification in store
                .notifications
                .iter_mut()
                .filter(|n| n.user_id == request.user_id)
                .filter(|n| n.matches_kind(request.kind.as_deref()))
            {
                let changed = match request.action {
                    BulkAction::Dismiss => notification.dismiss(now),
                    BulkAction::MarkRead => notification.mark_read(now),
                };
                if changed {
                    updated += 1;
                }
            }
            debug!(action = %request.action, updated, "Bulk update applied");
            Ack::ok()
        })
        .await
    }

    async fn generate_deadline_alerts(&self, scope: &NotificationScope) -> Result<Ack> {
        self.generate(ALERT_KIND_DEADLINE, scope).await
    }

    async fn generate_compliance_alerts(&self, scope: &NotificationScope) -> Result<Ack> {
        self.generate(ALERT_KIND_COMPLIANCE, scope).await
    }

    fn provider_name(&self) -> &str {
        PROVIDER_IN_MEMORY
    }
}
