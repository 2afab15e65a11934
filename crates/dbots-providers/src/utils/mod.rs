//! Shared utilities for transports

#[cfg(feature = "transport-reqwest")]
pub mod http_response;

#[cfg(feature = "transport-reqwest")]
pub use http_response::HttpResponseUtils;
