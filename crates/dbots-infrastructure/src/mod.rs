//! # dbots Infrastructure Layer
//!
//! Cross-cutting concerns for the poster binary and embedders.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | tracing-subscriber setup |
//! | [`bootstrap`] | Builds the transport, registry and poster from configuration |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::AppContext;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
