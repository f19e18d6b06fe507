//! Synchronizer configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REFRESH_INTERVAL_SECS;

/// Synchronizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Refresh in the background while a session is open
    pub auto_refresh: bool,

    /// Seconds between background refreshes
    pub refresh_interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl SyncConfig {
    /// Interval between background refreshes
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
