//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dbots.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dbots";

/// Prefix of configuration environment variables (`DBOTS__POSTER__CLIENT_ID`)
pub const CONFIG_ENV_PREFIX: &str = "DBOTS";

/// Separator between the prefix and nested keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "DBOTS_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem of rolling log files
pub const DEFAULT_LOG_FILE_STEM: &str = "dbots";
