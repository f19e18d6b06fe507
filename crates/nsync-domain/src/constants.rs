//! Domain layer constants
//!
//! Well-known alert kinds and list defaults. Alert kinds are open-ended on the
//! wire; these are the tags the remote service is known to emit.

// ============================================================================
// ALERT KINDS
// ============================================================================

/// Deadline reminder alerts
pub const ALERT_KIND_DEADLINE: &str = "deadline";

/// Compliance warning alerts
pub const ALERT_KIND_COMPLIANCE: &str = "compliance";

/// Anomaly flag alerts
pub const ALERT_KIND_ANOMALY: &str = "anomaly";

// ============================================================================
// LIST DEFAULTS
// ============================================================================

/// The synchronizer always fetches read and unread alerts
pub const LIST_UNREAD_ONLY: bool = false;

/// The synchronizer only fetches alerts that are still active server-side
pub const LIST_ACTIVE_ONLY: bool = true;
