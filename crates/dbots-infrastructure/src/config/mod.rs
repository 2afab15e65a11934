//! Configuration
//!
//! Sources are merged by [`ConfigLoader`]: defaults, then a TOML file, then
//! `DBOTS__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, HttpConfig, LoggingConfig, PosterConfig};
