//! # Infrastructure Layer
//!
//! Everything a running client needs around the synchronizer: layered
//! configuration, structured logging, periodic background refresh and the
//! session bootstrap that wires the remote provider to the synchronizer.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, `NSYNC__` env) |
//! | [`logging`] | `tracing-subscriber` setup with optional rotating file output |
//! | [`scheduler`] | `RefreshScheduler`, cancellable periodic refresh |
//! | [`session`] | `NotificationSession`, per-user composition root |
//! | [`error_ext`] | Context helpers mapping foreign errors to the domain error |
//! | [`constants`] | Infrastructure defaults |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod scheduler;
pub mod session;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
pub use scheduler::RefreshScheduler;
pub use session::NotificationSession;
