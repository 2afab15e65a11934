//! Poster Use Case
//!
//! Posts one stats snapshot to the services a bot has API keys for.
//! Scheduling and event notification stay with the caller.

use std::collections::BTreeMap;
use std::sync::Arc;

use dbots_domain::error::{Error, Result};
use dbots_domain::ports::{HttpTransport, StatsSource};
use dbots_domain::value_objects::{ClientStats, PostOptions, ServiceResponse};
use futures::future::join_all;
use tracing::{info, warn};

use crate::registry::ServiceRegistry;
use crate::services::ServiceDescriptor;

/// Result of posting to one service during a fan-out
#[derive(Debug)]
pub struct PostOutcome {
    /// The key the post was requested under
    pub service: String,
    /// Response or attributed error
    pub result: Result<ServiceResponse>,
}

impl PostOutcome {
    /// Whether the post succeeded
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Posts statistics to every service it holds an API key for
pub struct Poster {
    registry: Arc<ServiceRegistry>,
    transport: Arc<dyn HttpTransport>,
    stats: Arc<dyn StatsSource>,
    api_keys: BTreeMap<String, String>,
    custom_services: Vec<ServiceDescriptor>,
}

impl Poster {
    /// Create a poster with no API keys
    pub fn new(
        registry: Arc<ServiceRegistry>,
        transport: Arc<dyn HttpTransport>,
        stats: Arc<dyn StatsSource>,
    ) -> Self {
        Self {
            registry,
            transport,
            stats,
            api_keys: BTreeMap::new(),
            custom_services: Vec::new(),
        }
    }

    /// Add an API key for a service
    #[must_use]
    pub fn with_api_key(mut self, service: impl Into<String>, token: impl Into<String>) -> Self {
        self.api_keys.insert(service.into(), token.into());
        self
    }

    /// Add API keys for several services
    #[must_use]
    pub fn with_api_keys<I, K, V>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.api_keys
            .extend(keys.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a custom service, resolved after the built-ins
    #[must_use]
    pub fn with_custom_service(mut self, service: ServiceDescriptor) -> Self {
        self.custom_services.push(service);
        self
    }

    /// Services with a configured API key
    pub fn services(&self) -> Vec<&str> {
        self.api_keys.keys().map(String::as_str).collect()
    }

    /// Post the current stats to one service
    pub async fn post(&self, service: &str) -> Result<ServiceResponse> {
        if self.api_keys.is_empty() {
            return Err(Error::NoApiKeys);
        }
        let stats = self.stats.collect().await?;
        self.post_with_stats(service, stats).await
    }

    /// Post the current stats to every service with an API key
    ///
    /// Stats are collected once. Failures do not stop the other posts; each
    /// outcome carries its own error.
    pub async fn post_all(&self) -> Result<Vec<PostOutcome>> {
        if self.api_keys.is_empty() {
            return Err(Error::NoApiKeys);
        }
        let stats = self.stats.collect().await?;

        let posts = self.api_keys.keys().map(|service| {
            let stats = stats.clone();
            async move {
                PostOutcome {
                    service: service.clone(),
                    result: self.post_with_stats(service, stats).await,
                }
            }
        });
        let outcomes = join_all(posts).await;

        let failed = outcomes.iter().filter(|o| !o.is_success()).count();
        info!(
            total = outcomes.len(),
            failed, "Posted statistics to configured services"
        );
        Ok(outcomes)
    }

    async fn post_with_stats(&self, service: &str, stats: ClientStats) -> Result<ServiceResponse> {
        let descriptor = self
            .registry
            .get_or_invalid(service, &self.custom_services)?;
        let token = self
            .api_key_for(service, descriptor)
            .ok_or_else(|| Error::service_no_key(service))?;

        let options = PostOptions::from_stats(stats, Some(token.to_string()));
        descriptor
            .post(self.transport.as_ref(), &options)
            .await
            .inspect_err(|err| warn!(service, error = %err, "Failed to post statistics"))
    }

    /// The key configured under `service`, or under any alias of the descriptor
    fn api_key_for(&self, service: &str, descriptor: &ServiceDescriptor) -> Option<&str> {
        self.api_keys
            .get(service)
            .or_else(|| {
                self.api_keys
                    .iter()
                    .find(|(name, _)| descriptor.matches(name))
                    .map(|(_, token)| token)
            })
            .map(String::as_str)
            .filter(|token| !token.is_empty())
    }
}

impl std::fmt::Debug for Poster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poster")
            .field("services", &self.services())
            .field("custom_services", &self.custom_services.len())
            .field("transport", &self.transport.transport_name())
            .finish_non_exhaustive()
    }
}
