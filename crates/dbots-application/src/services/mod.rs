//! Service contract
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ServiceDescriptor`] | One bot-list integration and its post formatter |
//! | [`ServiceClient`] | Descriptor bound to a token and transport for read requests |
//! | [`compose_url`] | Base URL and query composition shared by `post` and `request` |

pub mod client;
pub mod descriptor;
pub mod url;

pub use client::{RequestOptions, ServiceClient};
pub use descriptor::{
    BotLookup, FieldError, FormatResult, PostFormatter, ServiceDescriptor, dispatch,
};
pub use url::{compose_url, is_absolute_url};
