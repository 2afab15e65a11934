//! # dbots Providers
//!
//! Built-in bot-list services and HTTP transports.
//!
//! ## Services
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`services`] | One descriptor and formatter per bot list, plus custom services |
//! | [`http`] | `ReqwestTransport`, `NullTransport` and client configuration |
//!
//! ## Feature Flags
//!
//! - `transport-reqwest` (default): network transport backed by reqwest

pub mod constants;
pub mod http;
pub mod services;
pub mod utils;

pub use http::{HttpClientConfig, NullTransport};
#[cfg(feature = "transport-reqwest")]
pub use http::ReqwestTransport;
pub use services::{
    AuthStyle, CustomServiceDefinition, build_custom_services, builtin_registry, builtin_services,
    get_service, list_services, resolve_service,
};
