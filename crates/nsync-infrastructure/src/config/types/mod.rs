//! Configuration types module

pub mod app;
pub mod logging;
pub mod remote;
pub mod sync;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use remote::RemoteConfig;
pub use sync::SyncConfig;
