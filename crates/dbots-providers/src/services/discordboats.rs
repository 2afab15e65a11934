//! Discord Boats

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("discordboats")
        .with_aliases(["discordboats", "discord.boats"])
        .with_display_name("Discord Boats")
        .with_website_url("https://discord.boats")
        .with_base_url("https://discord.boats/api/v2")
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
