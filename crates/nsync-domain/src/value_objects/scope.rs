//! Scope and query value objects for listing notifications

use serde::{Deserialize, Serialize};

use crate::constants::{LIST_ACTIVE_ONLY, LIST_UNREAD_ONLY};

/// Value Object: Notification Scope
///
/// Which user (and optionally which entity) a fetch or generation call
/// addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationScope {
    /// User whose alerts are addressed
    pub user_id: String,
    /// Optional entity filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl NotificationScope {
    /// Scope covering every alert of a user
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            entity_id: None,
        }
    }

    /// Restrict the scope to one entity
    pub fn with_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Build a scope from optional parts
    pub fn new(user_id: impl Into<String>, entity_id: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            entity_id,
        }
    }
}

/// Value Object: List Query Flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Only return alerts that are neither read nor dismissed
    pub unread_only: bool,
    /// Only return alerts that have not expired or been purged
    pub active_only: bool,
}

/// The synchronizer's query: every active alert, read or not
impl Default for ListQuery {
    fn default() -> Self {
        Self {
            unread_only: LIST_UNREAD_ONLY,
            active_only: LIST_ACTIVE_ONLY,
        }
    }
}
