//! Notification State
//!
//! The process-wide view owned by the synchronizer. Consumers only ever see
//! clones of it (snapshots), each one produced by a single atomic
//! replacement.

use chrono::{DateTime, Utc};
use nsync_domain::{Notification, NotificationList, SyncFailure};
use serde::Serialize;

/// Snapshot of the synchronized notification set
///
/// ## Invariants (after every completed operation)
///
/// - `unread_count` equals the number of alerts with neither `read_at` nor
///   `dismissed_at` set
/// - Alerts keep server order; local operations never remove, duplicate or
///   reorder entries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationState {
    /// Alerts in server order
    pub notifications: Vec<Notification>,
    /// Unread total
    pub unread_count: usize,
    /// At least one operation is awaiting the remote service
    pub is_loading: bool,
    /// Last failure, cleared by the next committed operation
    pub error: Option<SyncFailure>,
    /// Operations currently awaiting the remote service
    #[serde(skip)]
    pub(crate) in_flight: usize,
    /// Bumped on every reset; results issued under an older session are dropped
    #[serde(skip)]
    pub(crate) session: u64,
}

impl NotificationState {
    /// Idle state holding the given alerts, unread total derived from them
    pub fn from_notifications(notifications: Vec<Notification>) -> Self {
        Self::from(NotificationList::from_notifications(notifications))
    }

    /// Look up an alert by id
    pub fn get(&self, notification_id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == notification_id)
    }

    /// Alerts that count towards the unread total
    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.is_unread())
    }

    /// Alerts that are neither dismissed nor expired at `now`
    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(move |n| !n.is_dismissed() && !n.is_expired(now))
    }

    /// Alerts of one kind
    pub fn by_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Notification> {
        self.notifications.iter().filter(move |n| n.kind == kind)
    }

    /// Undismissed alerts that ask the user to act
    pub fn action_required(&self) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(|n| n.action_required && !n.is_dismissed())
    }

    /// Unread total recomputed from the alerts
    pub fn derived_unread_count(&self) -> usize {
        self.unread().count()
    }

    /// Whether `unread_count` agrees with the alerts
    pub fn is_consistent(&self) -> bool {
        self.unread_count == self.derived_unread_count()
    }

    /// Number of operations awaiting the remote service
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Session counter, bumped on every reset
    pub fn session(&self) -> u64 {
        self.session
    }
}

/// Idle state holding a server snapshot as-is
impl From<NotificationList> for NotificationState {
    fn from(list: NotificationList) -> Self {
        Self {
            notifications: list.notifications,
            unread_count: list.unread_count,
            ..Self::default()
        }
    }
}

/// Result of a synchronizer operation, for callers that want it
///
/// Failures are never raised past the synchronizer; they are recorded in
/// [`NotificationState::error`] and echoed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The remote service committed and the local delta was applied
    Committed,
    /// Nothing was applied locally
    Failed(SyncFailure),
    /// The state was reset before the result arrived; the result was dropped
    Superseded,
}

impl SyncOutcome {
    /// The operation committed
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }

    /// The failure, if any
    pub fn failure(&self) -> Option<&SyncFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Committed | Self::Superseded => None,
        }
    }
}
