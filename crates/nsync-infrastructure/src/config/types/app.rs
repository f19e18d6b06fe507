//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, RemoteConfig, SyncConfig};

/// Root configuration
///
/// Every section falls back to its defaults when absent from the file and
/// the environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote notification service
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Synchronizer behavior
    #[serde(default)]
    pub sync: SyncConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
