//! # nsync
//!
//! Client-side notification synchronization engine. Keeps a local view of a
//! user's alerts (deadline reminders, compliance warnings) reconciled with a
//! remote notification service, while several operations may be in flight
//! at once.
//!
//! This crate is the public facade: it re-exports the layer crates so a
//! consumer depends on one package.
//!
//! ## Example
//!
//! ```ignore
//! use nsync::{ConfigLoader, NotificationScope, NotificationSession};
//! use nsync::application::NotificationSyncServiceInterface;
//!
//! let config = ConfigLoader::new().load()?;
//! nsync::infrastructure::init_logging(&config.logging)?;
//!
//! let session = NotificationSession::start(&config, NotificationScope::user("u1")).await?;
//! let sync = session.synchronizer();
//! sync.dismiss("n1").await;
//! println!("{} unread", sync.snapshot().unread_count);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Notifications, remote port, error taxonomy
//! - `application` - State container, pure transitions, synchronizer
//! - `providers` - REST and in-memory notification services
//! - `infrastructure` - Config, logging, refresh scheduling, sessions

/// Domain layer - entities, value objects and the remote port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use nsync_domain::*;
}

/// Application layer - notification state and the synchronizer
pub mod application {
    pub use nsync_application::*;
}

/// Provider implementations of the remote notification service
pub mod providers {
    pub use nsync_providers::*;
}

/// Infrastructure layer - config, logging, scheduler and sessions
pub mod infrastructure {
    pub use nsync_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{NotificationState, NotificationSynchronizer, SyncOutcome};
pub use infrastructure::{AppConfig, ConfigLoader, NotificationSession};
