//! # nsync - Provider Implementations
//!
//! Implementations of the remote notification service port defined in
//! `nsync-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Notification service | `NotificationServiceProvider` | Http, InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! nsync-providers = { version = "0.1", default-features = false, features = ["remote-memory"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use nsync_providers::notification::{HttpNotificationService, InMemoryNotificationService};
//! use nsync_providers::http::HttpClientConfig;
//! ```

// Re-export nsync-domain types commonly used with providers
pub use nsync_domain::error::{Error, Result};
pub use nsync_domain::ports::NotificationServiceProvider;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration
pub mod http;

/// Notification service implementations
///
/// Implements `NotificationServiceProvider` for each supported backend.
pub mod notification;

#[cfg(feature = "remote-http")]
pub use notification::HttpNotificationService;
#[cfg(feature = "remote-memory")]
pub use notification::{InMemoryNotificationService, InjectedFailure};
