//! Bots on Discord (bots.ondiscord.xyz)

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("botsondiscord")
        .with_aliases(["botsondiscord", "bots.ondiscord.xyz"])
        .with_display_name("Bots on Discord")
        .with_website_url("https://bots.ondiscord.xyz")
        .with_base_url("https://bots.ondiscord.xyz/bot-api")
        .with_requires_token(true)
        .with_post_formatter(format)
}

pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    Ok(RequestForm::post(format!("/bots/{id}/guilds"))
        .with_authorization(token(options))
        .with_body(Value::Object(body_with_servers("guildCount", options))))
}
