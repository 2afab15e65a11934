//! HTTP transport port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{RequestForm, ServiceResponse};

/// Executes fully composed request forms
///
/// Implementations send method, URL, headers and body verbatim and report
/// non-2xx responses as [`crate::Error::Transport`] carrying the status and
/// body. Retries, pooling and timeouts are the implementation's concern.
///
/// Errors may leave the service key empty; callers attach it with
/// [`crate::Error::for_service`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the normalized response
    async fn execute(&self, form: &RequestForm) -> Result<ServiceResponse>;

    /// Short identifier for logs (e.g. "reqwest", "null")
    fn transport_name(&self) -> &str;
}
