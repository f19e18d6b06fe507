//! Application Use Cases
//!
//! Orchestration of the remote notification service and the local view.

pub mod synchronizer;

pub use synchronizer::NotificationSynchronizer;
