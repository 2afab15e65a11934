//! Common helpers for service formatters
//!
//! Shared option handling used across the built-in formatters.

use dbots_application::FieldError;
use dbots_domain::value_objects::{Count, PostOptions};
use serde_json::{Map, Value};

/// The client ID, rejected when empty
pub fn client_id(options: &PostOptions) -> Result<&str, FieldError> {
    let id = options.client_id.trim();
    if id.is_empty() {
        return Err(FieldError::required("client_id"));
    }
    Ok(id)
}

/// The token, or an empty string
///
/// Descriptors that need a token have already rejected its absence.
pub fn token(options: &PostOptions) -> &str {
    options.token().unwrap_or_default()
}

/// Insert a count under `field` only when it was supplied
pub fn insert_count(body: &mut Map<String, Value>, field: &str, count: Option<&Count>) {
    if let Some(count) = count {
        body.insert(field.to_string(), Value::from(count.total()));
    }
}

/// Start a payload with the aggregate server count under `field`
pub fn body_with_servers(field: &str, options: &PostOptions) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(field.to_string(), Value::from(options.server_count.total()));
    body
}
