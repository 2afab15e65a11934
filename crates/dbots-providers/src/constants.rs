//! Provider Constants
//!
//! Constants specific to transports and service definitions.

use std::time::Duration;

// ============================================================================
// HTTP TRANSPORT CONSTANTS
// ============================================================================

/// Default total request timeout
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default idle connection timeout
pub const DEFAULT_HTTP_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Default TCP keep-alive
pub const DEFAULT_HTTP_KEEPALIVE: Duration = Duration::from_secs(60);

/// Default maximum idle connections per host
pub const DEFAULT_HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// CUSTOM SERVICE CONSTANTS
// ============================================================================

/// Placeholder replaced with the client ID in custom service URL templates
pub const CLIENT_ID_PLACEHOLDER: &str = "{client_id}";

/// Default count field for custom services
pub const DEFAULT_SERVER_COUNT_FIELD: &str = "server_count";
