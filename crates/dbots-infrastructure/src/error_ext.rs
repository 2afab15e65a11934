//! Error extension utilities
//!
//! Context helpers that convert foreign errors into the domain error type.

use std::fmt;

use dbots_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// ```ignore
/// use dbots_infrastructure::error_ext::ErrorContext;
///
/// let text = toml::to_string_pretty(&config).config_context("Failed to serialize config")?;
/// ```
pub trait ErrorContext<T> {
    /// Convert the error to a configuration error with context
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Like [`Self::config_context`], building the context lazily
    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn with_config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{}: {}", f(), err),
            source: Some(Box::new(err)),
        })
    }
}
