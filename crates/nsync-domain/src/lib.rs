//! # Domain Layer
//!
//! Core types for the notification synchronization engine. This crate has no
//! knowledge of transports, runtimes or configuration: it defines what a
//! notification is, how the remote notification service is addressed, and
//! the error taxonomy shared by every other layer.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `Notification` and its severity |
//! | [`value_objects`] | Scopes, queries, remote responses, failure records |
//! | [`ports`] | `NotificationServiceProvider` remote contract |
//! | [`error`] | Domain error type and result alias |
//! | [`constants`] | Well-known alert kinds and defaults |

/// Domain constants
pub mod constants;
/// Entities with identity
pub mod entities;
/// Error handling types
pub mod error;
/// Port interfaces implemented by outer layers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use entities::{Notification, Severity};
pub use error::{Error, Result};
pub use ports::NotificationServiceProvider;
pub use value_objects::{
    Ack, BulkAction, BulkUpdate, FailureKind, ListQuery, NotificationList, NotificationScope,
    SyncFailure, SyncOperation,
};
