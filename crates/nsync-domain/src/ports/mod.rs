//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and outer layers. High-level code
//! (the synchronizer) depends on these traits; providers implement them.

/// Remote notification service port
pub mod notification_service;

pub use notification_service::{NotificationServiceProvider, SharedNotificationService};
