//! Normalized HTTP response

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response returned by a transport for a successful request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, lower-cased names
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON body, a JSON string for non-JSON bodies, `null` when empty
    #[serde(default)]
    pub body: Value,
}

impl ServiceResponse {
    /// Create a response with a status and body
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            ..Default::default()
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
