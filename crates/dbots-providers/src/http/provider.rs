//! HTTP client configuration
//!
//! Connection pooling, timeouts and user agent for the transports in this
//! module.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HTTP_IDLE_TIMEOUT, DEFAULT_HTTP_KEEPALIVE, DEFAULT_HTTP_MAX_IDLE_PER_HOST,
    DEFAULT_HTTP_TIMEOUT,
};

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: DEFAULT_HTTP_MAX_IDLE_PER_HOST,
            idle_timeout: DEFAULT_HTTP_IDLE_TIMEOUT,
            keepalive: DEFAULT_HTTP_KEEPALIVE,
            timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: format!("dbots/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Replace the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
