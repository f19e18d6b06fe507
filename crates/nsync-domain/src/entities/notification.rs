//! Notification Entity
//!
//! A single user-facing alert with read and dismiss state. Identity is the
//! `id` assigned by the remote service; it is stable across fetches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Info,
    /// Needs attention
    Warning,
    /// Needs action
    Error,
}

impl Severity {
    /// Wire name of this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(Error::invalid_argument(format!(
                "Unknown severity: {other}. Use info, warning, or error"
            ))),
        }
    }
}

/// Entity: Notification
///
/// ## Business Rules
///
/// - `read_at` is present iff the user has seen the alert
/// - `dismissed_at` is present iff the user has hidden the alert
/// - Dismissal implies read: dismissing an unread alert also stamps `read_at`
/// - An alert counts towards the unread total only while both are unset
///
/// ## Example
///
/// ```rust
/// use chrono::Utc;
/// use nsync_domain::{Notification, Severity};
///
/// let mut alert = Notification::new(
///     "n-1",
///     "user-1",
///     "deadline",
///     Severity::Warning,
///     "VAT return due",
///     "The Q3 VAT return is due in 3 days",
///     Utc::now(),
/// );
/// assert!(alert.is_unread());
///
/// alert.dismiss(Utc::now());
/// assert!(alert.is_read());
/// assert!(alert.is_dismissed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Opaque identifier assigned by the remote service
    pub id: String,
    /// Owner of the alert
    pub user_id: String,
    /// Optional entity (organisation, client) the alert is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Open-ended category tag (deadline, compliance, anomaly, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Alert severity
    pub severity: Severity,
    /// Short display title
    pub title: String,
    /// Display body
    pub message: String,
    /// Whether the alert asks the user to act
    #[serde(default)]
    pub action_required: bool,
    /// Optional navigation target for the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_link: Option<String>,
    /// Creation time, immutable
    pub created_at: DateTime<Utc>,
    /// When the user saw the alert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
    /// When the user hid the alert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissed_at: Option<DateTime<Utc>>,
    /// After this instant the alert is no longer actionable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Opaque payload
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Notification {
    /// Create an unread, undismissed alert with no optional fields set
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        kind: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            entity_id: None,
            kind: kind.into(),
            severity,
            title: title.into(),
            message: message.into(),
            action_required: false,
            action_link: None,
            created_at,
            read_at: None,
            dismissed_at: None,
            expires_at: None,
            data: Map::new(),
        }
    }

    /// Scope the alert to an entity
    pub fn with_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Mark the alert as requiring action, with an optional link
    pub fn with_action(mut self, link: Option<String>) -> Self {
        self.action_required = true;
        self.action_link = link;
        self
    }

    /// Set the expiry instant
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set the read timestamp
    pub fn with_read_at(mut self, read_at: DateTime<Utc>) -> Self {
        self.read_at = Some(read_at);
        self
    }

    /// Add a payload entry
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Counts towards the unread total
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none() && self.dismissed_at.is_none()
    }

    /// Has been seen
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Has been hidden
    pub fn is_dismissed(&self) -> bool {
        self.dismissed_at.is_some()
    }

    /// Past its expiry instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Matches an optional kind filter (`None` matches everything)
    pub fn matches_kind(&self, kind: Option<&str>) -> bool {
        kind.is_none_or(|k| self.kind == k)
    }

    /// Stamp `read_at` if unset
    ///
    /// Returns `true` if the alert changed.
    pub fn mark_read(&mut self, at: DateTime<Utc>) -> bool {
        if self.read_at.is_some() {
            return false;
        }
        self.read_at = Some(at);
        true
    }

    /// Stamp `dismissed_at` and, if unset, `read_at`
    ///
    /// An earlier dismissal timestamp is kept. Returns `true` if the alert changed.
    pub fn dismiss(&mut self, at: DateTime<Utc>) -> bool {
        let read_changed = self.mark_read(at);
        if self.dismissed_at.is_some() {
            return read_changed;
        }
        self.dismissed_at = Some(at);
        true
    }
}
