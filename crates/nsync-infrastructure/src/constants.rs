//! Infrastructure layer constants
//!
//! Defaults for configuration, logging and background refresh. Provider
//! specific values live in nsync-providers.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "nsync.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "nsync";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `NSYNC__REMOTE__BASE_URL`.
pub const CONFIG_ENV_PREFIX: &str = "NSYNC";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// REMOTE SERVICE CONSTANTS
// ============================================================================

/// Default notification service root
pub const DEFAULT_REMOTE_BASE_URL: &str = "http://localhost:8080/api";

/// Default request timeout in seconds
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

/// Default maximum idle connections per host
pub const DEFAULT_REMOTE_MAX_IDLE_PER_HOST: usize = 10;

// ============================================================================
// SYNC CONSTANTS
// ============================================================================

/// Default interval between background refreshes in seconds
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Smallest refresh interval accepted when auto refresh is enabled
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 5;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "NSYNC_LOG";

/// Log file name prefix when the configured path has no file stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "nsync";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
