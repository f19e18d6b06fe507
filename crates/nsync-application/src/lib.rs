//! Application Layer - nsync
//!
//! Implements the notification synchronizer: a single owned state container
//! that keeps a client-side view of a user's alerts reconciled with the
//! remote notification service.
//!
//! ## Architecture
//!
//! - [`state`]: the snapshot the UI observes (`NotificationState`)
//! - [`transitions`]: pure `(state, result) -> state` functions, one per
//!   operation outcome, testable without any network
//! - [`use_cases`]: `NotificationSynchronizer`, the thin async adapter that
//!   calls the remote port and applies a transition atomically
//! - [`ports`]: the consumer-facing service interface
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `nsync-domain`: entities, value objects, remote port
//! - Pure Rust libraries for async, serialization, logging

pub mod ports;
pub mod state;
pub mod transitions;
pub mod use_cases;

pub use ports::NotificationSyncServiceInterface;
pub use state::{NotificationState, SyncOutcome};
pub use use_cases::NotificationSynchronizer;
