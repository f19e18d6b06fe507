//! HTTP Client Configuration
//!
//! Connection pool and timeout settings shared by HTTP-based providers.
//!
//! ## Contents
//!
//! - `HttpClientConfig` - Configuration for HTTP client settings
//! - `HttpResponseUtils` - Utilities for handling HTTP responses (re-exported from utils)

pub mod provider;

pub use provider::HttpClientConfig;
pub use crate::utils::HttpResponseUtils;
