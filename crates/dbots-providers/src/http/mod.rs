//! HTTP transports
//!
//! Implementations of the [`dbots_domain::ports::HttpTransport`] port.
//!
//! ## Contents
//!
//! - `HttpClientConfig` - Pooling, timeout and user agent settings
//! - `ReqwestTransport` - Network transport (feature `transport-reqwest`)
//! - `NullTransport` - Records requests without sending them

pub mod null;
pub mod provider;
#[cfg(feature = "transport-reqwest")]
pub mod reqwest;

pub use null::NullTransport;
pub use provider::HttpClientConfig;
#[cfg(feature = "transport-reqwest")]
pub use reqwest::ReqwestTransport;
