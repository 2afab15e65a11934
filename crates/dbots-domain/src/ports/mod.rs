//! Domain Port Interfaces
//!
//! Boundaries between the request-formatting core and its collaborators.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`HttpTransport`] | Performs the actual HTTP call |
//! | [`StatsSource`] | Extracts counts from a running bot client |

/// HTTP transport port
pub mod transport;
/// Count extraction port
pub mod stats;

pub use stats::{StaticStats, StatsSource};
pub use transport::HttpTransport;
