//! # dbots Domain Layer
//!
//! Core types shared by every layer: the request descriptor every service
//! formatter produces, the uniform post options, the transport and stats
//! ports, and the error taxonomy.

/// Shared header names and URL schemes
pub mod constants;
/// Error taxonomy
pub mod error;
/// Collaborator ports
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{HttpTransport, StatsSource};
pub use value_objects::{
    ClientStats, Count, Method, PostOptions, RequestForm, ServiceResponse, Shard,
};
