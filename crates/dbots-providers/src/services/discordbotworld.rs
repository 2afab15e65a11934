//! Discord Bot World

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("discordbotworld")
        .with_aliases(["discordbotworld", "discordbot.world"])
        .with_display_name("Discord Bot World")
        .with_website_url("https://discordbot.world")
        .with_base_url("https://discordbot.world/api")
        .with_requires_token(true)
        .with_post_formatter(format)
}

pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    Ok(RequestForm::post(format!("/bot/{id}/stats"))
        .with_authorization(token(options))
        .with_body(Value::Object(body_with_servers("guild_count", options))))
}
