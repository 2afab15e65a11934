//! botlist.space
//!
//! Rejects stats posts without an explicit JSON content type.

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::constants::{CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("botlistspace")
        .with_aliases(["botlistspace", "botlist.space"])
        .with_display_name("botlist.space")
        .with_website_url("https://botlist.space")
        .with_base_url("https://api.botlist.space/v1")
        .with_requires_token(true)
        .with_post_formatter(format)
        .with_bot_lookup(|id, _| RequestForm::get(format!("/bots/{id}")))
}

pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    Ok(RequestForm::post(format!("/bots/{id}"))
        .with_authorization(token(options))
        .with_header(CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON)
        .with_body(Value::Object(body_with_servers("server_count", options))))
}
