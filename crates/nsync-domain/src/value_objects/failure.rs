//! Failure records surfaced through the synchronizer's `error` field

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Why a synchronizer operation did not commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The remote call was rejected or the service was unreachable
    NetworkFailure,
    /// The remote call resolved with `success: false`
    ServerRejection,
}

/// Operations exposed by the synchronizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOperation {
    /// Full list fetch (also used by refresh)
    Fetch,
    /// Mark one alert read
    MarkRead,
    /// Dismiss one alert
    Dismiss,
    /// Bulk dismiss
    DismissAll,
    /// Bulk mark read
    MarkAllRead,
    /// Trigger deadline alert generation
    GenerateDeadlineAlerts,
    /// Trigger compliance alert generation
    GenerateComplianceAlerts,
}

impl SyncOperation {
    /// Stable name used in logs and failure messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::MarkRead => "mark_read",
            Self::Dismiss => "dismiss",
            Self::DismissAll => "dismiss_all",
            Self::MarkAllRead => "mark_all_read",
            Self::GenerateDeadlineAlerts => "generate_deadline_alerts",
            Self::GenerateComplianceAlerts => "generate_compliance_alerts",
        }
    }
}

impl fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: Failed operation record
///
/// Cloneable snapshot of an [`Error`], so it can live inside the state the
/// UI observes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFailure {
    /// Operation that failed
    pub operation: SyncOperation,
    /// Failure classification
    pub kind: FailureKind,
    /// Human-readable description
    pub message: String,
}

impl SyncFailure {
    /// Record a failure from a domain error
    pub fn from_error(operation: SyncOperation, error: &Error) -> Self {
        Self {
            operation,
            kind: error.failure_kind(),
            message: error.to_string(),
        }
    }

    /// Record an explicit `success: false` answer
    pub fn rejected(operation: SyncOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind: FailureKind::ServerRejection,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyncFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}
