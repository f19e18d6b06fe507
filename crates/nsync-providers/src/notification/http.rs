//! REST Notification Service
//!
//! Implements the `NotificationServiceProvider` port over the notification
//! service's JSON API.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list | `GET {base}/notifications?userId=&entityId=&unreadOnly=&activeOnly=` |
//! | mark read | `POST {base}/notifications/{id}/read` |
//! | dismiss | `POST {base}/notifications/{id}/dismiss` |
//! | bulk update | `POST {base}/notifications/bulk` |
//! | deadline alerts | `POST {base}/alerts/deadlines` |
//! | compliance alerts | `POST {base}/alerts/compliance` |

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use nsync_domain::error::{Error, Result};
use nsync_domain::ports::NotificationServiceProvider;
use nsync_domain::value_objects::{
    Ack, BulkUpdate, ListQuery, NotificationList, NotificationScope,
};

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, PROVIDER_HTTP, SEGMENT_ALERTS, SEGMENT_BULK,
    SEGMENT_COMPLIANCE, SEGMENT_DEADLINES, SEGMENT_DISMISS, SEGMENT_NOTIFICATIONS, SEGMENT_READ,
};
use crate::http::HttpClientConfig;
use crate::utils::HttpResponseUtils;

/// REST notification service
///
/// Receives its HTTP client via constructor injection. Timeouts are the
/// client's: a request that exceeds them resolves to [`Error::Network`].
///
/// ## Example
///
/// ```rust,no_run
/// use nsync_providers::notification::HttpNotificationService;
/// use reqwest::Client;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let service = HttpNotificationService::new("https://api.example.com/v1", Client::new())?;
///     assert_eq!(service.base_url().path(), "/v1");
///     Ok(())
/// }
/// ```
pub struct HttpNotificationService {
    base_url: Url,
    http_client: Client,
}

impl HttpNotificationService {
    /// Create a new REST notification service
    ///
    /// # Arguments
    /// * `base_url` - Service root (e.g. "https://api.example.com/v1")
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: &str, http_client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid notification service URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Notification service URL '{base_url}' cannot carry a path"
            )));
        }
        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Create a service with a client built from `config`
    pub fn from_config(base_url: &str, config: &HttpClientConfig) -> Result<Self> {
        Self::new(base_url, config.build_client()?)
    }

    /// Service root
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended by path segments (each one percent-encoded)
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("Notification service URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode its JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, operation: &str) -> Result<T> {
        let response = request
            .header("Content-Type", CONTENT_TYPE_JSON)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::network(format!("{operation}: {ERROR_MSG_REQUEST_TIMEOUT} {e}"))
                } else {
                    Error::network_with_source(format!("{operation}: HTTP request failed"), e)
                }
            })?;

        HttpResponseUtils::check_and_parse(response, operation).await
    }

    async fn post_ack<B: serde::Serialize + ?Sized>(
        &self,
        url: Url,
        body: Option<&B>,
        operation: &str,
    ) -> Result<Ack> {
        debug!(operation, url = %url, "POST");
        let mut request = self.http_client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request, operation).await
    }
}

#[async_trait]
impl NotificationServiceProvider for HttpNotificationService {
    async fn list(&self, scope: &NotificationScope, query: ListQuery) -> Result<NotificationList> {
        let mut url = self.endpoint(&[SEGMENT_NOTIFICATIONS])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("userId", &scope.user_id);
            if let Some(entity_id) = &scope.entity_id {
                pairs.append_pair("entityId", entity_id);
            }
            pairs.append_pair("unreadOnly", if query.unread_only { "true" } else { "false" });
            pairs.append_pair("activeOnly", if query.active_only { "true" } else { "false" });
        }
        debug!(url = %url, "GET notifications");
        self.send(self.http_client.get(url), "list").await
    }

    async fn mark_read(&self, notification_id: &str) -> Result<Ack> {
        let url = self.endpoint(&[SEGMENT_NOTIFICATIONS, notification_id, SEGMENT_READ])?;
        self.post_ack::<()>(url, None, "mark_read").await
    }

    async fn dismiss(&self, notification_id: &str) -> Result<Ack> {
        let url = self.endpoint(&[SEGMENT_NOTIFICATIONS, notification_id, SEGMENT_DISMISS])?;
        self.post_ack::<()>(url, None, "dismiss").await
    }

    async fn bulk_update(&self, request: &BulkUpdate) -> Result<Ack> {
        let url = self.endpoint(&[SEGMENT_NOTIFICATIONS, SEGMENT_BULK])?;
        self.post_ack(url, Some(request), "bulk_update").await
    }

    async fn generate_deadline_alerts(&self, scope: &NotificationScope) -> Result<Ack> {
        let url = self.endpoint(&[SEGMENT_ALERTS, SEGMENT_DEADLINES])?;
        self.post_ack(url, Some(scope), "generate_deadline_alerts")
            .await
    }

    async fn generate_compliance_alerts(&self, scope: &NotificationScope) -> Result<Ack> {
        let url = self.endpoint(&[SEGMENT_ALERTS, SEGMENT_COMPLIANCE])?;
        self.post_ack(url, Some(scope), "generate_compliance_alerts")
            .await
    }

    fn provider_name(&self) -> &str {
        PROVIDER_HTTP
    }
}
