//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Notification`] | A user-facing alert with read/dismiss state |

/// Notification entity
pub mod notification;

pub use notification::{Notification, Severity};
