//! Notification Synchronizer Use Case
//!
//! Thin async adapter around [`crate::transitions`]: each operation marks
//! itself pending, awaits the remote port, and applies exactly one transition
//! to the state cell.
//!
//! ## Consistency discipline
//!
//! - Confirm-then-apply: local alerts change only after the server reports
//!   `success: true`. The one wholesale write is a successful fetch.
//! - A transport error and a `success: false` answer are handled identically
//!   (nothing applied, `error` recorded).
//! - Deltas are computed from the state at the moment they are applied, inside
//!   the cell's write lock, so concurrent completions never interleave.
//! - The last applied write wins. A refresh landing after a dismiss may bring
//!   back server state that predates the dismissal; that is accepted.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use nsync_domain::{
    Ack, BulkAction, BulkUpdate, ListQuery, NotificationScope, NotificationServiceProvider,
    Result, SyncFailure, SyncOperation,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::ports::NotificationSyncServiceInterface;
use crate::state::{NotificationState, SyncOutcome};
use crate::transitions;

/// Fallback text when the server rejects without a reason
const REJECTED_WITHOUT_REASON: &str = "remote service reported success: false";

/// Owned notification state container
///
/// Created at session start and torn down with [`NotificationSyncServiceInterface::reset`];
/// there is no process-wide instance. Share it behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// use nsync_application::{NotificationSynchronizer, NotificationSyncServiceInterface};
/// use nsync_domain::NotificationScope;
///
/// let sync = NotificationSynchronizer::new(service);
/// let scope = NotificationScope::user("user-1");
///
/// sync.fetch(&scope).await;
/// if let Some(first) = sync.snapshot().unread().next() {
///     sync.dismiss(&first.id.clone()).await;
/// }
/// ```
pub struct NotificationSynchronizer {
    service: Arc<dyn NotificationServiceProvider>,
    state: watch::Sender<NotificationState>,
}

impl NotificationSynchronizer {
    /// Create an empty synchronizer bound to a remote service
    pub fn new(service: Arc<dyn NotificationServiceProvider>) -> Self {
        Self::with_state(service, NotificationState::default())
    }

    /// Create a synchronizer seeded with an existing view
    pub fn with_state(
        service: Arc<dyn NotificationServiceProvider>,
        initial: NotificationState,
    ) -> Self {
        Self {
            service,
            state: watch::Sender::new(initial),
        }
    }

    /// Name of the remote service implementation
    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }

    /// Mark an operation pending; returns the session it belongs to
    fn begin(&self, operation: SyncOperation) -> u64 {
        let mut session = 0;
        self.state.send_modify(|state| {
            *state = transitions::begin(std::mem::take(state));
            session = state.session;
        });
        debug!(operation = %operation, "Operation pending");
        session
    }

    /// Mark an operation pending within `session`; `false` if it was reset
    fn begin_in(&self, operation: SyncOperation, session: u64) -> bool {
        let begun = self.state.send_if_modified(|state| {
            if state.session != session {
                return false;
            }
            *state = transitions::begin(std::mem::take(state));
            true
        });
        if begun {
            debug!(operation = %operation, "Operation pending");
        }
        begun
    }

    /// Apply a transition unless the session was reset in the meantime
    fn apply<F>(&self, session: u64, transition: F) -> bool
    where
        F: FnOnce(NotificationState) -> NotificationState,
    {
        self.state.send_if_modified(|state| {
            if state.session != session {
                return false;
            }
            *state = transition(std::mem::take(state));
            true
        })
    }

    /// Record a failure; local alerts stay untouched
    fn fail(&self, session: u64, failure: SyncFailure) -> SyncOutcome {
        warn!(
            operation = %failure.operation,
            kind = ?failure.kind,
            error = %failure.message,
            "Operation failed, local state kept"
        );
        let recorded = failure.clone();
        if !self.apply(session, |state| transitions::failed(state, recorded)) {
            debug!(operation = %failure.operation, "Session reset before failure was recorded");
            return SyncOutcome::Superseded;
        }
        SyncOutcome::Failed(failure)
    }

    /// Treat transport errors and `success: false` answers the same way
    fn confirm(
        operation: SyncOperation,
        result: Result<Ack>,
    ) -> std::result::Result<(), SyncFailure> {
        match result {
            Ok(ack) if ack.success => Ok(()),
            Ok(ack) => Err(SyncFailure::rejected(
                operation,
                ack.message
                    .unwrap_or_else(|| REJECTED_WITHOUT_REASON.to_string()),
            )),
            Err(e) => Err(SyncFailure::from_error(operation, &e)),
        }
    }

    /// Shared body of confirm-then-apply operations
    fn confirmed<F>(
        &self,
        operation: SyncOperation,
        session: u64,
        result: Result<Ack>,
        transition: F,
    ) -> SyncOutcome
    where
        F: FnOnce(NotificationState) -> NotificationState,
    {
        match Self::confirm(operation, result) {
            Ok(()) => {
                if self.apply(session, transition) {
                    info!(operation = %operation, unread = self.state.borrow().unread_count, "Operation committed");
                    SyncOutcome::Committed
                } else {
                    debug!(operation = %operation, "Session reset before result arrived, dropped");
                    SyncOutcome::Superseded
                }
            }
            Err(failure) => self.fail(session, failure),
        }
    }

    async fn bulk(&self, operation: SyncOperation, request: BulkUpdate) -> SyncOutcome {
        let session = self.begin(operation);
        let result = self.service.bulk_update(&request).await;
        let action = request.action;
        let kind = request.kind.clone();
        self.confirmed(operation, session, result, move |state| {
            transitions::bulk_update_succeeded(state, action, kind.as_deref(), Utc::now())
        })
    }

    /// Two-phase generation: trigger, then reconcile through a full fetch
    async fn generate(
        &self,
        operation: SyncOperation,
        scope: &NotificationScope,
        result: Result<Ack>,
        session: u64,
    ) -> SyncOutcome {
        match Self::confirm(operation, result) {
            Ok(()) => {
                info!(operation = %operation, user_id = %scope.user_id, "Alert generation triggered, reconciling");
                // The fetch is issued while this operation is still pending so
                // `is_loading` only drops once the reconciled view is in place.
                // It belongs to the generation's session: a reset in between
                // cancels it.
                if !self.begin_in(SyncOperation::Fetch, session) {
                    debug!(operation = %operation, "Session reset before reconciliation, dropped");
                    return SyncOutcome::Superseded;
                }
                let outcome = self.fetch_in(session, scope).await;
                let settled = self.apply(session, |state| match &outcome {
                    SyncOutcome::Failed(failure) => transitions::failed(state, failure.clone()),
                    _ => transitions::acknowledged(state),
                });
                if settled {
                    outcome
                } else {
                    SyncOutcome::Superseded
                }
            }
            Err(failure) => self.fail(session, failure),
        }
    }

    /// List and replace the view; the fetch must already be pending in `session`
    async fn fetch_in(&self, session: u64, scope: &NotificationScope) -> SyncOutcome {
        match self.service.list(scope, ListQuery::default()).await {
            Ok(list) => {
                let received = list.notifications.len();
                let server_unread = list.unread_count;
                if self.apply(session, |state| transitions::fetch_succeeded(state, list)) {
                    let state = self.state.borrow();
                    if !state.is_consistent() {
                        warn!(
                            server_unread,
                            derived_unread = state.derived_unread_count(),
                            "Server unread count disagrees with the alert set"
                        );
                    }
                    info!(user_id = %scope.user_id, received, unread = server_unread, "Notifications reconciled");
                    SyncOutcome::Committed
                } else {
                    debug!("Session reset before fetch result arrived, dropped");
                    SyncOutcome::Superseded
                }
            }
            Err(e) => self.fail(session, SyncFailure::from_error(SyncOperation::Fetch, &e)),
        }
    }
}

impl std::fmt::Debug for NotificationSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("NotificationSynchronizer")
            .field("provider", &self.service.provider_name())
            .field("notifications", &state.notifications.len())
            .field("unread_count", &state.unread_count)
            .field("is_loading", &state.is_loading)
            .finish()
    }
}

#[async_trait]
impl NotificationSyncServiceInterface for NotificationSynchronizer {
    fn snapshot(&self) -> NotificationState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<NotificationState> {
        self.state.subscribe()
    }

    async fn fetch(&self, scope: &NotificationScope) -> SyncOutcome {
        let session = self.begin(SyncOperation::Fetch);
        self.fetch_in(session, scope).await
    }

    async fn refresh(&self, scope: &NotificationScope) -> SyncOutcome {
        self.fetch(scope).await
    }

    async fn mark_read(&self, notification_id: &str) -> SyncOutcome {
        let operation = SyncOperation::MarkRead;
        let session = self.begin(operation);
        let known = self.state.borrow().get(notification_id).is_some();
        if !known {
            debug!(notification_id, "Alert not in local view, local update will be a no-op");
        }
        let result = self.service.mark_read(notification_id).await;
        self.confirmed(operation, session, result, |state| {
            transitions::mark_read_succeeded(state, notification_id, Utc::now())
        })
    }

    async fn dismiss(&self, notification_id: &str) -> SyncOutcome {
        let operation = SyncOperation::Dismiss;
        let session = self.begin(operation);
        let result = self.service.dismiss(notification_id).await;
        self.confirmed(operation, session, result, |state| {
            transitions::dismiss_succeeded(state, notification_id, Utc::now())
        })
    }

    async fn dismiss_all(&self, user_id: &str, kind: Option<&str>) -> SyncOutcome {
        let request = BulkUpdate::new(BulkAction::Dismiss, user_id, kind.map(str::to_string));
        self.bulk(SyncOperation::DismissAll, request).await
    }

    async fn mark_all_read(&self, user_id: &str, kind: Option<&str>) -> SyncOutcome {
        let request = BulkUpdate::new(BulkAction::MarkRead, user_id, kind.map(str::to_string));
        self.bulk(SyncOperation::MarkAllRead, request).await
    }

    async fn generate_deadline_alerts(&self, scope: &NotificationScope) -> SyncOutcome {
        let operation = SyncOperation::GenerateDeadlineAlerts;
        let session = self.begin(operation);
        let result = self.service.generate_deadline_alerts(scope).await;
        self.generate(operation, scope, result, session).await
    }

    async fn generate_compliance_alerts(&self, scope: &NotificationScope) -> SyncOutcome {
        let operation = SyncOperation::GenerateComplianceAlerts;
        let session = self.begin(operation);
        let result = self.service.generate_compliance_alerts(scope).await;
        self.generate(operation, scope, result, session).await
    }

    fn reset(&self) {
        self.state
            .send_modify(|state| *state = transitions::reset(std::mem::take(state)));
        info!("Notification state reset");
    }
}
