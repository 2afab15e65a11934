//! Application Layer - dbots
//!
//! Service abstraction and request formatting for bot-list statistics.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines the [`ServiceDescriptor`] contract every bot-list integration satisfies
//! - Composes request URLs from a service's base URL and formatter output
//! - Resolves services by alias through the [`ServiceRegistry`]
//! - Fans statistics out to configured services through the [`Poster`]
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `dbots-domain`: value objects, ports and the error taxonomy
//! - Pure Rust libraries for async, URL handling and logging
//!
//! The built-in service table lives in `dbots-providers`.

pub mod registry;
pub mod services;
pub mod use_cases;

pub use registry::ServiceRegistry;
pub use services::{
    FieldError, FormatResult, PostFormatter, RequestOptions, ServiceClient, ServiceDescriptor,
};
pub use use_cases::{PostOutcome, Poster};
