//! Discord Bots (discord.bots.gg)
//!
//! See <https://discord.bots.gg/docs/endpoints>

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, token};

/// discord.bots.gg descriptor
pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("discordbotsgg")
        .with_aliases(["discordbotsgg", "discord.bots.gg"])
        .with_display_name("Discord Bots")
        .with_website_url("https://discord.bots.gg")
        .with_base_url("https://discord.bots.gg/api/v1")
        .with_requires_token(true)
        .with_post_formatter(format)
        .with_bot_lookup(|id, _| RequestForm::get(format!("/bots/{id}")))
}

/// Uses camelCase fields: `guildCount`, `shardId`, `shardCount`
pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    let mut body = body_with_servers("guildCount", options);
    if let Some(shard) = options.shard {
        body.insert("shardId".to_string(), shard.id.into());
        body.insert("shardCount".to_string(), shard.count.into());
    }

    Ok(RequestForm::post(format!("/bots/{id}/stats"))
        .with_authorization(token(options))
        .with_body(Value::Object(body)))
}
