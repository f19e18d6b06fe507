//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in nsync-domain) and infrastructure constants.

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum idle connections per host
pub const HTTP_DEFAULT_MAX_IDLE_PER_HOST: usize = 10;

/// Default idle connection timeout in seconds
pub const HTTP_DEFAULT_IDLE_TIMEOUT_SECS: u64 = 90;

// ============================================================================
// NOTIFICATION SERVICE ENDPOINTS (path segments below the base URL)
// ============================================================================

/// Alert collection
pub const SEGMENT_NOTIFICATIONS: &str = "notifications";

/// Bulk update, below the alert collection
pub const SEGMENT_BULK: &str = "bulk";

/// Per-alert read action
pub const SEGMENT_READ: &str = "read";

/// Per-alert dismiss action
pub const SEGMENT_DISMISS: &str = "dismiss";

/// Alert generation root
pub const SEGMENT_ALERTS: &str = "alerts";

/// Deadline alert generation, below the alert generation root
pub const SEGMENT_DEADLINES: &str = "deadlines";

/// Compliance alert generation, below the alert generation root
pub const SEGMENT_COMPLIANCE: &str = "compliance";

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// REST provider name
pub const PROVIDER_HTTP: &str = "http";

/// In-memory provider name
pub const PROVIDER_IN_MEMORY: &str = "in_memory";
