//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`RequestForm`] | Outbound HTTP request built by a service formatter |
//! | [`PostOptions`] | Uniform statistics input for posting |
//! | [`Count`] | Scalar or per-shard count |
//! | [`ServiceResponse`] | Normalized response of a dispatched request |

/// Request descriptor types
pub mod request;
/// Normalized response types
pub mod response;
/// Statistics and post option types
pub mod stats;

pub use request::{Method, RequestForm};
pub use response::ServiceResponse;
pub use stats::{ClientStats, Count, PostOptions, Shard};
