//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`NotificationScope`] | User (and optional entity) addressed by a call |
//! | [`ListQuery`] | Unread-only / active-only list flags |
//! | [`NotificationList`] | Authoritative list snapshot with unread total |
//! | [`Ack`] | Success flag of a side-effecting remote call |
//! | [`BulkUpdate`] | Bulk dismiss / mark-read request |
//! | [`SyncFailure`] | Failed operation record kept in state |

/// Failure records
pub mod failure;
/// Remote request/response shapes
pub mod remote;
/// Scopes and queries
pub mod scope;

pub use failure::{FailureKind, SyncFailure, SyncOperation};
pub use remote::{Ack, BulkAction, BulkUpdate, NotificationList};
pub use scope::{ListQuery, NotificationScope};
