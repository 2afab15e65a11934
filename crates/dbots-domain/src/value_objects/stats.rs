//! Statistics value objects
//!
//! The uniform input every service formatter maps from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A count reported either as a single total or per shard
///
/// Per-shard sequences are summed, saturating at `u64::MAX`, before they are
/// written into a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    /// Aggregate total
    Total(u64),
    /// One entry per shard, in shard order
    PerShard(Vec<u64>),
}

impl Count {
    /// Aggregate value of this count
    pub fn total(&self) -> u64 {
        match self {
            Self::Total(total) => *total,
            Self::PerShard(counts) => counts.iter().fold(0_u64, |sum, n| sum.saturating_add(*n)),
        }
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::Total(0)
    }
}

impl From<u64> for Count {
    fn from(total: u64) -> Self {
        Self::Total(total)
    }
}

impl From<u32> for Count {
    fn from(total: u32) -> Self {
        Self::Total(u64::from(total))
    }
}

impl From<Vec<u64>> for Count {
    fn from(counts: Vec<u64>) -> Self {
        Self::PerShard(counts)
    }
}

/// Shard the poster is running as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shard {
    /// Zero-based shard ID
    pub id: u32,
    /// Total number of shards
    pub count: u32,
}

impl Shard {
    /// Create a shard descriptor
    pub fn new(id: u32, count: u32) -> Self {
        Self { id, count }
    }
}

/// Counts gathered from a running client
///
/// Returned by a [`crate::ports::StatsSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStats {
    /// Bot/application ID
    pub client_id: String,
    /// Guilds the client is in
    pub server_count: Count,
    /// Users the client can see
    #[serde(default)]
    pub user_count: Option<Count>,
    /// Active voice connections
    #[serde(default)]
    pub voice_connections: Option<Count>,
    /// Shard the client runs as
    #[serde(default)]
    pub shard: Option<Shard>,
}

/// Options passed to a service's `post` operation
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOptions {
    /// Credential for the service
    #[serde(default)]
    pub token: Option<String>,
    /// Bot/application ID
    pub client_id: String,
    /// Guild count
    pub server_count: Count,
    /// User count, omitted from payloads when absent
    #[serde(default)]
    pub user_count: Option<Count>,
    /// Voice connection count, omitted from payloads when absent
    #[serde(default)]
    pub voice_connections: Option<Count>,
    /// Shard information, omitted from payloads when absent
    #[serde(default)]
    pub shard: Option<Shard>,
}

impl PostOptions {
    /// Create options for a client ID and server count
    pub fn new(client_id: impl Into<String>, server_count: impl Into<Count>) -> Self {
        Self {
            client_id: client_id.into(),
            server_count: server_count.into(),
            ..Default::default()
        }
    }

    /// Build options from collected client stats
    pub fn from_stats(stats: ClientStats, token: Option<String>) -> Self {
        Self {
            token,
            client_id: stats.client_id,
            server_count: stats.server_count,
            user_count: stats.user_count,
            voice_connections: stats.voice_connections,
            shard: stats.shard,
        }
    }

    /// Set the token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the user count
    #[must_use]
    pub fn with_user_count(mut self, count: impl Into<Count>) -> Self {
        self.user_count = Some(count.into());
        self
    }

    /// Set the voice connection count
    #[must_use]
    pub fn with_voice_connections(mut self, count: impl Into<Count>) -> Self {
        self.voice_connections = Some(count.into());
        self
    }

    /// Set the shard
    #[must_use]
    pub fn with_shard(mut self, shard: Shard) -> Self {
        self.shard = Some(shard);
        self
    }

    /// The token, treating an empty string as absent
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

impl fmt::Debug for PostOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOptions")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("client_id", &self.client_id)
            .field("server_count", &self.server_count)
            .field("user_count", &self.user_count)
            .field("voice_connections", &self.voice_connections)
            .field("shard", &self.shard)
            .finish()
    }
}
