//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dbots
#[derive(Error, Debug)]
pub enum Error {
    /// `post`/`request` reached a descriptor that has no formatter or aliases
    #[error("{operation} was called on the base service contract")]
    CalledFromBase {
        /// The operation that was attempted
        operation: &'static str,
    },

    /// The service needs a credential and none was supplied
    #[error("Can't post to \"{service}\" without a token")]
    RequiresToken {
        /// Canonical key of the service
        service: String,
    },

    /// No registered descriptor matches the lookup key
    #[error("\"{service}\" is an invalid service")]
    InvalidService {
        /// The key that failed to resolve
        service: String,
    },

    /// The post options could not be formatted for a service
    #[error("Invalid option `{field}` for \"{service}\": {message}")]
    InvalidOptions {
        /// Canonical key of the service
        service: String,
        /// The offending option field
        field: &'static str,
        /// Description of the problem
        message: String,
    },

    /// A composed URL is not absolute or cannot be parsed
    #[error("Invalid URL \"{url}\" for \"{service}\": {message}")]
    InvalidUrl {
        /// Canonical key of the service, empty until attributed
        service: String,
        /// The URL that was rejected
        url: String,
        /// Description of the problem
        message: String,
    },

    /// The HTTP call failed (network failure or non-2xx status)
    #[error("Request to \"{service}\" failed: {message}")]
    Transport {
        /// Canonical key of the service the request was sent for
        service: String,
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Response body, when a response was received
        body: Option<String>,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service does not support the requested operation
    #[error("The service \"{service}\" does not support {operation}")]
    Unsupported {
        /// Canonical key of the service
        service: String,
        /// The unsupported operation
        operation: &'static str,
    },

    /// A poster was asked to post without any configured API keys
    #[error("Can't post with a poster that has no API keys")]
    NoApiKeys,

    /// A poster has no API key configured for the requested service
    #[error("Can't post to \"{service}\" without an API key")]
    ServiceNoKey {
        /// The requested service key
        service: String,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Service error creation methods
impl Error {
    /// Create a called-from-base error
    pub fn called_from_base(operation: &'static str) -> Self {
        Self::CalledFromBase { operation }
    }

    /// Create a requires-token error
    pub fn requires_token<S: Into<String>>(service: S) -> Self {
        Self::RequiresToken {
            service: service.into(),
        }
    }

    /// Create an invalid service error
    pub fn invalid_service<S: Into<String>>(service: S) -> Self {
        Self::InvalidService {
            service: service.into(),
        }
    }

    /// Create an invalid options error
    pub fn invalid_options<S: Into<String>, M: Into<String>>(
        service: S,
        field: &'static str,
        message: M,
    ) -> Self {
        Self::InvalidOptions {
            service: service.into(),
            field,
            message: message.into(),
        }
    }

    /// Create an invalid URL error not yet attributed to a service
    pub fn invalid_url<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::InvalidUrl {
            service: String::new(),
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported<S: Into<String>>(service: S, operation: &'static str) -> Self {
        Self::Unsupported {
            service: service.into(),
            operation,
        }
    }

    /// Create a service-no-key error
    pub fn service_no_key<S: Into<String>>(service: S) -> Self {
        Self::ServiceNoKey {
            service: service.into(),
        }
    }
}

// Transport error creation methods
impl Error {
    /// Create a transport error for a failed connection (no response)
    pub fn transport<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::Transport {
            service: service.into(),
            status: None,
            body: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error with source
    pub fn transport_with_source<
        S: Into<String>,
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        service: S,
        message: M,
        source: E,
    ) -> Self {
        Self::Transport {
            service: service.into(),
            status: None,
            body: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a transport error for a non-2xx response
    pub fn http_status<S: Into<String>>(service: S, status: u16, body: String) -> Self {
        Self::Transport {
            service: service.into(),
            status: Some(status),
            body: Some(body),
            message: format!("HTTP status {status}"),
            source: None,
        }
    }

    /// Attach a service key to a transport or URL error raised without one
    #[must_use]
    pub fn for_service(self, key: &str) -> Self {
        match self {
            Self::InvalidUrl {
                service,
                url,
                message,
            } if service.is_empty() => Self::InvalidUrl {
                service: key.to_string(),
                url,
                message,
            },
            Self::Transport {
                service,
                status,
                body,
                message,
                source,
            } if service.is_empty() => Self::Transport {
                service: key.to_string(),
                status,
                body,
                message,
                source,
            },
            other => other,
        }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification
impl Error {
    /// Whether the caller can reasonably continue (e.g. with other services)
    ///
    /// `CalledFromBase` and `Internal` indicate bugs and are never recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CalledFromBase { .. } | Self::Internal { .. })
    }

    /// Canonical key of the service this error is attributed to, if any
    pub fn service(&self) -> Option<&str> {
        match self {
            Self::RequiresToken { service }
            | Self::InvalidService { service }
            | Self::InvalidOptions { service, .. }
            | Self::InvalidUrl { service, .. }
            | Self::Transport { service, .. }
            | Self::Unsupported { service, .. }
            | Self::ServiceNoKey { service } => Some(service.as_str()),
            _ => None,
        }
        .filter(|service| !service.is_empty())
    }

    /// HTTP status of a failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
