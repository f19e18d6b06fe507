//! Configuration
//!
//! Layered with figment: defaults, then a TOML file, then `NSYNC__`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, RemoteConfig, SyncConfig};
