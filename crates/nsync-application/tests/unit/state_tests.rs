//! Tests for the state views

use chrono::{Duration, Utc};
use nsync_application::NotificationState;
use nsync_domain::{Notification, NotificationList, Severity};

fn alert(id: &str, kind: &str) -> Notification {
    Notification::new(id, "u1", kind, Severity::Info, "title", "message", Utc::now())
}

#[test]
fn test_default_state_is_idle_and_empty() {
    let state = NotificationState::default();
    assert!(state.notifications.is_empty());
    assert_eq!(state.unread_count, 0);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(state.in_flight(), 0);
    assert!(state.is_consistent());
}

#[test]
fn test_from_notifications_derives_count() {
    let now = Utc::now();
    let state = NotificationState::from_notifications(vec![
        alert("a", "deadline"),
        alert("b", "deadline").with_read_at(now),
        alert("c", "compliance"),
    ]);
    assert_eq!(state.unread_count, 2);
    assert!(state.is_consistent());
    assert_eq!(
        state.unread().map(|n| n.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "c"]
    );
}

#[test]
fn test_from_list_keeps_server_count() {
    let list = NotificationList {
        notifications: vec![alert("a", "deadline")],
        unread_count: 4,
    };
    let state = NotificationState::from(list);
    assert_eq!(state.unread_count, 4);
    assert_eq!(state.derived_unread_count(), 1);
    assert!(!state.is_consistent());
}

#[test]
fn test_views() {
    let now = Utc::now();
    let mut dismissed = alert("d", "deadline");
    dismissed.dismiss(now);
    let state = NotificationState::from_notifications(vec![
        alert("a", "deadline").with_action(Some("/filings".to_string())),
        alert("b", "compliance").with_expiry(now - Duration::minutes(5)),
        alert("c", "compliance"),
        dismissed.with_action(Some("/archive".to_string())),
    ]);

    assert_eq!(state.get("c").map(|n| n.kind.as_str()), Some("compliance"));
    assert!(state.get("zzz").is_none());

    let active: Vec<_> = state.active(now).map(|n| n.id.as_str()).collect();
    assert_eq!(active, vec!["a", "c"]);

    let compliance: Vec<_> = state.by_kind("compliance").map(|n| n.id.as_str()).collect();
    assert_eq!(compliance, vec!["b", "c"]);

    let actionable: Vec<_> = state.action_required().map(|n| n.id.as_str()).collect();
    assert_eq!(actionable, vec!["a"]);
}

#[test]
fn test_serializes_public_fields_only() {
    let state = NotificationState::from_notifications(vec![alert("a", "deadline")]);
    let value = serde_json::to_value(&state).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("unreadCount"), Some(&serde_json::json!(1)));
    assert_eq!(object.get("isLoading"), Some(&serde_json::json!(false)));
    assert!(object.contains_key("error"));
    assert!(!object.contains_key("inFlight"));
    assert!(!object.contains_key("session"));
}
