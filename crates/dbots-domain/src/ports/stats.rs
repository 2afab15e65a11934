//! Statistics source port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::ClientStats;

/// Supplies the current counts of a running bot client
///
/// One implementation exists per chat framework; dbots treats the values
/// as opaque inputs.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Collect the current statistics
    async fn collect(&self) -> Result<ClientStats>;
}

/// Stats source that always returns the same snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticStats {
    stats: ClientStats,
}

impl StaticStats {
    /// Wrap a fixed snapshot
    pub fn new(stats: ClientStats) -> Self {
        Self { stats }
    }
}

#[async_trait]
impl StatsSource for StaticStats {
    async fn collect(&self) -> Result<ClientStats> {
        Ok(self.stats.clone())
    }
}
