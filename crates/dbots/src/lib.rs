//! # dbots
//!
//! Post Discord bot statistics to bot-list websites.
//!
//! Each supported list is a [`ServiceDescriptor`](application::ServiceDescriptor)
//! found by alias in a static registry. Its formatter turns uniform
//! [`PostOptions`](domain::PostOptions) into the list's own request shape.
//!
//! ## Example
//!
//! ```no_run
//! use dbots::domain::PostOptions;
//! use dbots::providers::{HttpClientConfig, ReqwestTransport, resolve_service};
//!
//! # async fn example() -> dbots::domain::Result<()> {
//! let transport = ReqwestTransport::new(HttpClientConfig::default())?;
//! let service = resolve_service("top.gg", &[]).expect("built in");
//! let options = PostOptions::new("123456789", 1500u64).with_token("token");
//! service.post(&transport, &options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Request and stats value objects, ports, errors
//! - `application` - Descriptor contract, registry, poster
//! - `providers` - Built-in lists and HTTP transports
//! - `infrastructure` - Configuration, logging, wiring
//! - `cli` - The `dbots` command

pub mod cli;

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dbots_domain::*;
}

/// Application layer - descriptor contract, registry and poster
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use dbots_application::*;
}

/// Providers - built-in bot lists and transports
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use dbots_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use dbots_infrastructure::*;
}

pub use dbots_application::{Poster, ServiceDescriptor};
pub use dbots_domain::{Error, PostOptions, Result};
pub use dbots_providers::{list_services, resolve_service};
