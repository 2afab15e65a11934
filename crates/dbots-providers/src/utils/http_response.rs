//! HTTP Response Utilities
//!
//! Converts reqwest responses into the transport-neutral
//! [`ServiceResponse`].

use std::collections::BTreeMap;

use dbots_domain::error::{Error, Result};
use dbots_domain::value_objects::ServiceResponse;
use reqwest::Response;
use serde_json::Value;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check the status and normalize the body
    ///
    /// Non-2xx statuses become a transport error carrying the status and raw
    /// body, with no service attached yet. A 2xx body is parsed as JSON, kept
    /// as a JSON string when it is not JSON, and `null` when empty.
    pub async fn into_service_response(response: Response) -> Result<ServiceResponse> {
        let status = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_ascii_lowercase(), value.to_string()))
            })
            .collect();

        let text = response
            .text()
            .await
            .map_err(|e| Error::transport_with_source("", "Failed to read response body", e))?;

        if !(200..300).contains(&status) {
            return Err(Error::http_status("", status, text));
        }

        Ok(ServiceResponse {
            status,
            headers,
            body: Self::parse_body(&text),
        })
    }

    /// JSON when parseable, otherwise the raw text; `null` when empty
    pub fn parse_body(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }
}
