//! Application wiring
//!
//! Builds the transport, the built-in registry handle, configured custom
//! services and the [`Poster`] from an [`AppConfig`].

use std::sync::Arc;

use dbots_application::{Poster, ServiceDescriptor, ServiceRegistry};
use dbots_domain::error::Result;
use dbots_domain::ports::{HttpTransport, StaticStats};
use dbots_providers::{NullTransport, ReqwestTransport, build_custom_services, builtin_registry};
use tracing::debug;

use crate::config::AppConfig;

/// Everything a command needs, built once from configuration
#[derive(Clone)]
pub struct AppContext {
    config: AppConfig,
    registry: Arc<ServiceRegistry>,
    custom_services: Vec<ServiceDescriptor>,
    transport: Arc<dyn HttpTransport>,
}

impl AppContext {
    /// Wire the context with a network transport
    pub fn new(config: AppConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.http.to_client_config())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Wire the context with a transport that sends nothing
    pub fn dry_run(config: AppConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(NullTransport::new()))
    }

    /// Wire the context with a caller-supplied transport
    pub fn with_transport(config: AppConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let custom_services = build_custom_services(config.poster.custom_services.clone())?;
        debug!(
            custom_services = custom_services.len(),
            transport = transport.transport_name(),
            "Application context built"
        );

        Ok(Self {
            config,
            registry: builtin_registry(),
            custom_services,
            transport,
        })
    }

    /// The loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The built-in registry
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Descriptors built from `poster.custom_services`
    pub fn custom_services(&self) -> &[ServiceDescriptor] {
        &self.custom_services
    }

    /// The transport requests go through
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::clone(&self.transport)
    }

    /// Resolve a key against the built-ins, then the custom services
    pub fn resolve(&self, key: &str) -> Result<&ServiceDescriptor> {
        self.registry.get_or_invalid(key, &self.custom_services)
    }

    /// A poster for the configured stats and API keys
    pub fn poster(&self) -> Poster {
        let stats = StaticStats::new(self.config.poster.client_stats());
        let poster = Poster::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.transport),
            Arc::new(stats),
        )
        .with_api_keys(self.config.poster.api_keys.clone());

        self.custom_services
            .iter()
            .cloned()
            .fold(poster, Poster::with_custom_service)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("builtin_services", &self.registry.len())
            .field("custom_services", &self.custom_services.len())
            .field("transport", &self.transport.transport_name())
            .finish_non_exhaustive()
    }
}
