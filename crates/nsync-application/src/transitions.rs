//! State Transitions
//!
//! Every operation outcome is a pure function from the current state (plus
//! the remote result) to the next state. The synchronizer applies exactly one
//! of these per state write, so consumers never observe a partially applied
//! operation.
//!
//! Counter adjustments are floored at zero and bulk operations recompute the
//! unread total from the filter instead of subtracting, so out-of-order
//! completions cannot drive the count negative or double count.

use chrono::{DateTime, Utc};
use nsync_domain::{BulkAction, NotificationList, SyncFailure};

use crate::state::NotificationState;

/// An operation started awaiting the remote service
pub fn begin(mut state: NotificationState) -> NotificationState {
    state.in_flight += 1;
    state.is_loading = true;
    state
}

/// A fetch succeeded: the server snapshot replaces the local view wholesale
pub fn fetch_succeeded(state: NotificationState, list: NotificationList) -> NotificationState {
    let mut next = commit(state);
    next.notifications = list.notifications;
    next.unread_count = list.unread_count;
    next
}

/// A remote mark-read succeeded
///
/// Stamps `read_at` and decrements the unread total only if the alert was
/// still unread; an absent id or an already-read alert leaves the view
/// untouched.
pub fn mark_read_succeeded(
    state: NotificationState,
    notification_id: &str,
    now: DateTime<Utc>,
) -> NotificationState {
    let mut next = commit(state);
    if let Some(notification) = next
        .notifications
        .iter_mut()
        .find(|n| n.id == notification_id)
    {
        let was_unread = notification.is_unread();
        notification.mark_read(now);
        if was_unread {
            next.unread_count = next.unread_count.saturating_sub(1);
        }
    }
    next
}

/// A remote dismiss succeeded
///
/// Stamps `dismissed_at` and, if unset, `read_at`. The unread total drops by
/// one only if the alert was unread before dismissal.
pub fn dismiss_succeeded(
    state: NotificationState,
    notification_id: &str,
    now: DateTime<Utc>,
) -> NotificationState {
    let mut next = commit(state);
    if let Some(notification) = next
        .notifications
        .iter_mut()
        .find(|n| n.id == notification_id)
    {
        let was_unread = notification.is_unread();
        notification.dismiss(now);
        if was_unread {
            next.unread_count = next.unread_count.saturating_sub(1);
        }
    }
    next
}

/// A remote bulk update succeeded
///
/// Every alert matching `kind` (`None` matches all) is cleared according to
/// `action`. The unread total becomes the number of alerts outside the filter
/// that were unread before the mutation; alerts inside the filter no longer
/// contribute.
pub fn bulk_update_succeeded(
    state: NotificationState,
    action: BulkAction,
    kind: Option<&str>,
    now: DateTime<Utc>,
) -> NotificationState {
    let mut next = commit(state);
    let unread_outside_filter = next
        .notifications
        .iter()
        .filter(|n| !n.matches_kind(kind) && n.is_unread())
        .count();

    for notification in next
        .notifications
        .iter_mut()
        .filter(|n| n.matches_kind(kind))
    {
        match action {
            BulkAction::Dismiss => {
                if !notification.is_dismissed() {
                    notification.dismiss(now);
                }
            }
            BulkAction::MarkRead => {
                notification.mark_read(now);
            }
        }
    }

    next.unread_count = unread_outside_filter;
    next
}

/// A remote call succeeded without any local delta (alert generation)
pub fn acknowledged(state: NotificationState) -> NotificationState {
    commit(state)
}

/// An operation failed: only `error` changes
pub fn failed(state: NotificationState, failure: SyncFailure) -> NotificationState {
    let mut next = finish(state);
    next.error = Some(failure);
    next
}

/// Session teardown: back to an empty, idle view under a new session
pub fn reset(state: NotificationState) -> NotificationState {
    NotificationState {
        session: state.session.wrapping_add(1),
        ..NotificationState::default()
    }
}

fn commit(state: NotificationState) -> NotificationState {
    let mut next = finish(state);
    next.error = None;
    next
}

fn finish(mut state: NotificationState) -> NotificationState {
    state.in_flight = state.in_flight.saturating_sub(1);
    state.is_loading = state.in_flight > 0;
    state
}
