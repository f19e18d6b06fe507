//! HTTP Client Configuration
//!
//! The infrastructure layer maps its remote settings onto this type; the
//! provider layer owns turning it into a pooled `reqwest::Client`.

use nsync_domain::error::{Error, Result};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    HTTP_DEFAULT_IDLE_TIMEOUT_SECS, HTTP_DEFAULT_MAX_IDLE_PER_HOST, HTTP_DEFAULT_TIMEOUT_SECS,
};

/// HTTP client configuration
///
/// Controls connection pooling, timeouts, and other HTTP client behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Bearer token sent with every request
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: HTTP_DEFAULT_MAX_IDLE_PER_HOST,
            idle_timeout: Duration::from_secs(HTTP_DEFAULT_IDLE_TIMEOUT_SECS),
            timeout: Duration::from_secs(HTTP_DEFAULT_TIMEOUT_SECS),
            user_agent: format!("nsync/{}", env!("CARGO_PKG_VERSION")),
            api_key: None,
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Attach a bearer token
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build a pooled client from this configuration
    pub fn build_client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| Error::config(format!("Invalid API key header: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))
    }
}
