//! Null transport
//!
//! Answers every request with an empty 200 response without touching the
//! network. Used for dry runs and tests.

use std::sync::Mutex;

use async_trait::async_trait;
use dbots_domain::error::{Error, Result};
use dbots_domain::ports::HttpTransport;
use dbots_domain::value_objects::{RequestForm, ServiceResponse};
use serde_json::Value;
use tracing::info;

/// Transport that records requests instead of sending them
#[derive(Debug, Default)]
pub struct NullTransport {
    sent: Mutex<Vec<RequestForm>>,
}

impl NullTransport {
    /// Create an empty null transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, in order
    pub fn sent(&self) -> Result<Vec<RequestForm>> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .map_err(|_| Error::internal("null transport lock poisoned"))
    }
}

#[async_trait]
impl HttpTransport for NullTransport {
    async fn execute(&self, form: &RequestForm) -> Result<ServiceResponse> {
        info!(method = %form.method, url = %form.url, "Dry run, request not sent");
        self.sent
            .lock()
            .map_err(|_| Error::internal("null transport lock poisoned"))?
            .push(form.clone());
        Ok(ServiceResponse::new(200, Value::Null))
    }

    fn transport_name(&self) -> &str {
        "null"
    }
}
