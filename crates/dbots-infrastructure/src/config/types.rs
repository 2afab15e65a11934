//! Configuration types
//!
//! Every section has defaults so an empty file, or no file, is valid.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use dbots_domain::value_objects::{ClientStats, Count, Shard};
use dbots_providers::{CustomServiceDefinition, HttpClientConfig};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// HTTP client settings
    pub http: HttpConfig,
    /// What to post and where
    pub poster: PosterConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json_format: bool,
    /// Also write to a daily rolling file at this path
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// HTTP client configuration, in whole seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total request timeout
    pub timeout_secs: u64,
    /// Idle pooled connection timeout
    pub idle_timeout_secs: u64,
    /// TCP keep-alive
    pub keepalive_secs: u64,
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        let defaults = HttpClientConfig::default();
        Self {
            timeout_secs: defaults.timeout.as_secs(),
            idle_timeout_secs: defaults.idle_timeout.as_secs(),
            keepalive_secs: defaults.keepalive.as_secs(),
            max_idle_per_host: defaults.max_idle_per_host,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    /// Client configuration for the transport
    pub fn to_client_config(&self) -> HttpClientConfig {
        let config = HttpClientConfig {
            max_idle_per_host: self.max_idle_per_host,
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
            keepalive: Duration::from_secs(self.keepalive_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        };
        match &self.user_agent {
            Some(user_agent) => config.with_user_agent(user_agent.clone()),
            None => config,
        }
    }
}

/// Statistics and credentials for posting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    /// Bot/application ID
    pub client_id: String,
    /// Service key or alias to token
    pub api_keys: BTreeMap<String, String>,
    /// Guild count, a total or one entry per shard
    pub server_count: Count,
    /// User count
    pub user_count: Option<Count>,
    /// Voice connection count
    pub voice_connections: Option<Count>,
    /// Shard the bot runs as
    pub shard: Option<Shard>,
    /// Bot lists that are not built in
    pub custom_services: Vec<CustomServiceDefinition>,
}

impl PosterConfig {
    /// The configured counts as client stats
    pub fn client_stats(&self) -> ClientStats {
        ClientStats {
            client_id: self.client_id.clone(),
            server_count: self.server_count.clone(),
            user_count: self.user_count.clone(),
            voice_connections: self.voice_connections.clone(),
            shard: self.shard,
        }
    }
}
