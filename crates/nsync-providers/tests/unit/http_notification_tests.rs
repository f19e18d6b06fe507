//! Tests for the REST notification service against a mock server

use std::time::Duration;

use mockito::{Matcher, Server};
use nsync_domain::{
    BulkAction, BulkUpdate, Error, ListQuery, NotificationScope, NotificationServiceProvider,
    Severity,
};
use nsync_providers::http::HttpClientConfig;
use nsync_providers::notification::HttpNotificationService;
use serde_json::json;

fn service(base_url: &str) -> HttpNotificationService {
    HttpNotificationService::from_config(base_url, &HttpClientConfig::default())
        .expect("client should build")
}

#[test]
fn test_rejects_invalid_base_url() {
    let result = HttpNotificationService::new("not a url", reqwest::Client::new());
    assert!(matches!(result, Err(Error::Config { .. })));

    let result = HttpNotificationService::new("mailto:ops@example.com", reqwest::Client::new());
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_provider_name() {
    let service = service("http://localhost:8080");
    assert_eq!(service.provider_name(), "http");
}

#[tokio::test]
async fn test_list_sends_scope_and_flags() {
    let mut server = Server::new_async().await;
    let body = json!({
        "notifications": [
            {
                "id": "n1",
                "userId": "u1",
                "entityId": "org-1",
                "type": "deadline",
                "severity": "warning",
                "title": "Filing due",
                "message": "Quarterly filing due in 3 days",
                "actionRequired": true,
                "actionLink": "/filings/q3",
                "createdAt": "2026-10-01T09:00:00Z",
                "data": {"daysLeft": 3}
            },
            {
                "id": "n2",
                "userId": "u1",
                "type": "compliance",
                "severity": "info",
                "title": "Policy updated",
                "message": "Review the new policy",
                "createdAt": "2026-10-02T09:00:00Z",
                "readAt": "2026-10-02T10:00:00Z"
            }
        ],
        "unreadCount": 1
    });
    let mock = server
        .mock("GET", "/notifications")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("userId".into(), "u1".into()),
            Matcher::UrlEncoded("entityId".into(), "org-1".into()),
            Matcher::UrlEncoded("unreadOnly".into(), "false".into()),
            Matcher::UrlEncoded("activeOnly".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let scope = NotificationScope::user("u1").with_entity("org-1");
    let list = service(&server.url())
        .list(&scope, ListQuery::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(list.unread_count, 1);
    assert_eq!(list.notifications.len(), 2);
    let first = &list.notifications[0];
    assert_eq!(first.kind, "deadline");
    assert_eq!(first.severity, Severity::Warning);
    assert!(first.action_required);
    assert_eq!(first.data.get("daysLeft"), Some(&json!(3)));
    assert!(list.notifications[1].is_read());
}

#[tokio::test]
async fn test_list_omits_entity_when_unscoped() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/notifications")
        .match_query("userId=u1&unreadOnly=false&activeOnly=true")
        .with_status(200)
        .with_body(json!({"notifications": [], "unreadCount": 0}).to_string())
        .create_async()
        .await;

    let list = service(&server.url())
        .list(&NotificationScope::user("u1"), ListQuery::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(list.notifications.is_empty());
}

#[tokio::test]
async fn test_base_path_is_preserved() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/notifications/n1/read")
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .create_async()
        .await;

    let ack = service(&format!("{}/api/v1/", server.url()))
        .mark_read("n1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(ack.success);
}

#[tokio::test]
async fn test_success_false_is_returned_as_ack() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/notifications/n1/dismiss")
        .with_status(200)
        .with_body(json!({"success": false, "message": "already archived"}).to_string())
        .create_async()
        .await;

    let ack = service(&server.url()).dismiss("n1").await.unwrap();

    assert!(!ack.success);
    assert_eq!(ack.message.as_deref(), Some("already archived"));
}

#[tokio::test]
async fn test_bulk_update_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/notifications/bulk")
        .match_body(Matcher::Json(
            json!({"action": "mark_read", "userId": "u1", "type": "compliance"}),
        ))
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .create_async()
        .await;

    let request = BulkUpdate::new(BulkAction::MarkRead, "u1", Some("compliance".to_string()));
    let ack = service(&server.url()).bulk_update(&request).await.unwrap();

    mock.assert_async().await;
    assert!(ack.success);
}

#[tokio::test]
async fn test_generation_endpoints() {
    let mut server = Server::new_async().await;
    let deadlines = server
        .mock("POST", "/alerts/deadlines")
        .match_body(Matcher::Json(json!({"userId": "u1", "entityId": "org-1"})))
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .create_async()
        .await;
    let compliance = server
        .mock("POST", "/alerts/compliance")
        .match_body(Matcher::Json(json!({"userId": "u1"})))
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .create_async()
        .await;

    let service = service(&server.url());
    let scoped = NotificationScope::user("u1").with_entity("org-1");
    assert!(service.generate_deadline_alerts(&scoped).await.unwrap().success);
    assert!(
        service
            .generate_compliance_alerts(&NotificationScope::user("u1"))
            .await
            .unwrap()
            .success
    );

    deadlines.assert_async().await;
    compliance.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_network_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/notifications/n1/read")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let err = service(&server.url()).mark_read("n1").await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }));
    let message = err.to_string();
    assert!(message.contains("server error (503)"), "{message}");
    assert!(message.contains("maintenance"), "{message}");
}

#[tokio::test]
async fn test_malformed_body_is_network_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/notifications")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let err = service(&server.url())
        .list(&NotificationScope::user("u1"), ListQuery::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("response parse failed"));
}

#[tokio::test]
async fn test_unreachable_service_is_network_failure() {
    // Port 9 (discard) is not expected to accept HTTP connections
    let config = HttpClientConfig::with_timeout(Duration::from_secs(2));
    let service = HttpNotificationService::from_config("http://127.0.0.1:9", &config).unwrap();

    let err = service.dismiss("n1").await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
}

#[tokio::test]
async fn test_api_key_sent_as_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/notifications/n1/read")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .create_async()
        .await;

    let config = HttpClientConfig::default().with_api_key("secret-token");
    let service = HttpNotificationService::from_config(&server.url(), &config).unwrap();
    service.mark_read("n1").await.unwrap();

    mock.assert_async().await;
}
