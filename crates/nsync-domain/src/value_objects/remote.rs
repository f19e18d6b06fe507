//! Request and response shapes of the remote notification service
//!
//! These are transport-agnostic; the HTTP adapter serializes them as
//! camelCase JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Notification;

/// Value Object: Authoritative list snapshot returned by the remote service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationList {
    /// Alerts in server order
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Server-computed unread total
    #[serde(default)]
    pub unread_count: usize,
}

impl NotificationList {
    /// Build a list whose unread total is derived from the alerts
    pub fn from_notifications(notifications: Vec<Notification>) -> Self {
        let unread_count = notifications.iter().filter(|n| n.is_unread()).count();
        Self {
            notifications,
            unread_count,
        }
    }
}

/// Value Object: Acknowledgement of a side-effecting remote call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Whether the remote service committed the change
    pub success: bool,
    /// Optional explanation supplied by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Ack {
    /// Successful acknowledgement
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Unsuccessful acknowledgement with a reason
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Bulk update action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    /// Dismiss (and implicitly read) every matching alert
    Dismiss,
    /// Read every matching alert
    MarkRead,
}

impl BulkAction {
    /// Wire name of this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::MarkRead => "mark_read",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: Bulk update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdate {
    /// Action applied to every matching alert
    pub action: BulkAction,
    /// Owner of the alerts
    pub user_id: String,
    /// Optional kind filter (`None` means every kind)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl BulkUpdate {
    /// Create a bulk update request
    pub fn new(action: BulkAction, user_id: impl Into<String>, kind: Option<String>) -> Self {
        Self {
            action,
            user_id: user_id.into(),
            kind,
        }
    }
}
