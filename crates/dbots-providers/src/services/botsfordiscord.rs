//! Bots For Discord

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("botsfordiscord")
        .with_aliases(["botsfordiscord", "botsfordiscord.com"])
        .with_display_name("Bots For Discord")
        .with_website_url("https://botsfordiscord.com")
        .with_base_url("https://botsfordiscord.com/api")
        .with_requires_token(true)
        .with_post_formatter(format)
        .with_bot_lookup(|id, _| RequestForm::get(format!("/bot/{id}")))
}

pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    Ok(RequestForm::post(format!("/bot/{id}"))
        .with_authorization(token(options))
        .with_body(Value::Object(body_with_servers("server_count", options))))
}
