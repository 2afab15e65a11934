//! Service Registry
//!
//! Maps lookup keys to service descriptors. Built-in descriptors are handed
//! in once at construction; custom descriptors are supplied per lookup and
//! never stored.

use dbots_domain::error::{Error, Result};
use tracing::trace;

use crate::services::ServiceDescriptor;

/// Ordered set of built-in service descriptors
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: Vec<ServiceDescriptor>,
}

impl ServiceRegistry {
    /// Create a registry from a static definition set, keeping its order
    pub fn new(services: Vec<ServiceDescriptor>) -> Self {
        Self { services }
    }

    /// Resolve a key against built-ins first, then `customs`
    ///
    /// Matching is case-insensitive against each descriptor's aliases and the
    /// first match wins. Descriptors without aliases or a post formatter are
    /// skipped. An unknown key yields `None`, not an error.
    pub fn resolve<'a>(
        &'a self,
        key: &str,
        customs: &'a [ServiceDescriptor],
    ) -> Option<&'a ServiceDescriptor> {
        if key.is_empty() {
            return None;
        }

        let found = self
            .services
            .iter()
            .chain(customs)
            .filter(|service| service.is_resolvable())
            .find(|service| service.matches(key));

        trace!(key, found = ?found.map(|s| s.key.as_ref()), "Resolved service");
        found
    }

    /// Like [`Self::resolve`], but an unknown key is an `InvalidService` error
    pub fn get_or_invalid<'a>(
        &'a self,
        key: &str,
        customs: &'a [ServiceDescriptor],
    ) -> Result<&'a ServiceDescriptor> {
        self.resolve(key, customs)
            .ok_or_else(|| Error::invalid_service(key))
    }

    /// All resolvable built-in descriptors, in definition order
    pub fn list(&self) -> Vec<&ServiceDescriptor> {
        self.services
            .iter()
            .filter(|service| service.is_resolvable())
            .collect()
    }

    /// Canonical keys of all resolvable built-ins, in definition order
    pub fn keys(&self) -> Vec<&str> {
        self.list()
            .into_iter()
            .map(|service| service.key.as_ref())
            .collect()
    }

    /// Number of built-in descriptors, resolvable or not
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry has no built-in descriptors
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
