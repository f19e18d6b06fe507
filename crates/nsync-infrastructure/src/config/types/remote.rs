//! Remote notification service configuration

use std::time::Duration;

use nsync_providers::http::HttpClientConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_REMOTE_BASE_URL, DEFAULT_REMOTE_MAX_IDLE_PER_HOST, DEFAULT_REMOTE_TIMEOUT_SECS,
};

/// Remote notification service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Service root, e.g. `https://api.example.com/v1`
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Bearer token, if the service requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REMOTE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            user_agent: format!("nsync/{}", env!("CARGO_PKG_VERSION")),
            api_key: None,
            max_idle_per_host: DEFAULT_REMOTE_MAX_IDLE_PER_HOST,
        }
    }
}

impl RemoteConfig {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// HTTP client settings for the REST provider
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            max_idle_per_host: self.max_idle_per_host,
            timeout: self.timeout(),
            user_agent: self.user_agent.clone(),
            api_key: self.api_key.clone(),
            ..HttpClientConfig::default()
        }
    }
}
