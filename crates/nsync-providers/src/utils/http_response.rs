//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from the notification
//! service. These are shared utilities, not ports.

use nsync_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Format error message for a remote call
fn remote_error(operation: &str, context: &str, details: &str) -> Error {
    Error::network(format!("{operation} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Every non-success status is a transport-level failure: the caller never
/// sees a body from a failed request, only an [`Error::Network`].
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `operation` - Name of the remote operation for error messages
    ///
    /// # Returns
    /// Parsed body on success, or a network error
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        operation: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => remote_error(operation, "authentication failed", &error_text),
                404 => remote_error(operation, "resource not found", &error_text),
                429 => remote_error(operation, "rate limit exceeded", &error_text),
                500..=599 => {
                    remote_error(operation, &format!("server error ({code})"), &error_text)
                }
                _ => remote_error(operation, &format!("request failed ({code})"), &error_text),
            });
        }

        response
            .json()
            .await
            .map_err(|e| remote_error(operation, "response parse failed", &e.to_string()))
    }
}
