//! Session bootstrap tests

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use nsync_application::NotificationSyncServiceInterface;
use nsync_domain::{Error, FailureKind, Notification, NotificationScope, Severity};
use nsync_infrastructure::config::{ConfigBuilder, SyncConfig};
use nsync_infrastructure::session::NotificationSession;
use nsync_providers::notification::{InMemoryNotificationService, InjectedFailure};

fn alert(id: &str) -> Notification {
    Notification::new(
        id,
        "u1",
        "compliance",
        Severity::Warning,
        "Certificate expiring",
        "Renew before the end of the month",
        Utc::now(),
    )
}

fn manual() -> SyncConfig {
    SyncConfig {
        auto_refresh: false,
        ..SyncConfig::default()
    }
}

#[tokio::test]
async fn test_start_performs_initial_fetch() {
    let service = Arc::new(InMemoryNotificationService::with_notifications(vec![
        alert("a"),
        alert("b"),
    ]));

    let session =
        NotificationSession::start_with_service(&manual(), service, NotificationScope::user("u1"))
            .await
            .unwrap();

    let state = session.synchronizer().snapshot();
    assert_eq!(state.notifications.len(), 2);
    assert_eq!(state.unread_count, 2);
    assert_eq!(session.scope().user_id, "u1");
    assert!(session.scheduler().is_none());
}

#[tokio::test]
async fn test_failed_initial_fetch_is_not_fatal() {
    let service = Arc::new(InMemoryNotificationService::with_notifications(vec![alert("a")]));
    service.fail_next_list(InjectedFailure::Unreachable).await;

    let session = NotificationSession::start_with_service(
        &manual(),
        service.clone(),
        NotificationScope::user("u1"),
    )
    .await
    .unwrap();

    let state = session.synchronizer().snapshot();
    assert!(state.notifications.is_empty());
    assert_eq!(
        state.error.as_ref().map(|failure| failure.kind),
        Some(FailureKind::NetworkFailure)
    );

    session.synchronizer().refresh(session.scope()).await;
    assert_eq!(session.synchronizer().snapshot().unread_count, 1);
}

#[tokio::test]
async fn test_empty_user_is_rejected() {
    let service = Arc::new(InMemoryNotificationService::new());

    let result =
        NotificationSession::start_with_service(&manual(), service, NotificationScope::user(" "))
            .await;

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_auto_refresh_runs_until_shutdown() {
    let service = Arc::new(InMemoryNotificationService::new());
    let sync_config = SyncConfig {
        auto_refresh: true,
        refresh_interval_secs: 10,
    };

    let session = NotificationSession::start_with_service(
        &sync_config,
        service.clone(),
        NotificationScope::user("u1"),
    )
    .await
    .unwrap();
    let scheduler = session.scheduler().unwrap();
    assert!(scheduler.is_running().await);

    service.insert(alert("a")).await;
    tokio::time::sleep(Duration::from_secs(15)).await;
    let sync = session.synchronizer();
    assert_eq!(sync.snapshot().unread_count, 1);

    session.shutdown().await;
    let state = sync.snapshot();
    assert!(state.notifications.is_empty());
    assert_eq!(state.unread_count, 0);

    let calls = service.call_count().await;
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(service.call_count().await, calls);
}

#[tokio::test]
async fn test_zero_refresh_interval_is_rejected() {
    let service = Arc::new(InMemoryNotificationService::new());
    let sync_config = SyncConfig {
        auto_refresh: true,
        refresh_interval_secs: 0,
    };

    let result = NotificationSession::start_with_service(
        &sync_config,
        service.clone(),
        NotificationScope::user("u1"),
    )
    .await;

    assert!(matches!(result, Err(Error::Config { .. })));
    assert_eq!(service.call_count().await, 0, "no fetch for a rejected session");
}

#[tokio::test]
async fn test_start_validates_config() {
    let config = ConfigBuilder::new().with_base_url("not a url").build();

    let result = NotificationSession::start(&config, NotificationScope::user("u1")).await;

    assert!(matches!(result, Err(Error::Config { .. })));
}
