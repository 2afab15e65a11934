//! Discord Bot List (discordbotlist.com)
//!
//! The only built-in list that accepts user and voice connection counts.
//! Authorization uses the `Bot <token>` form.

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, insert_count, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("discordbotlist")
        .with_aliases(["discordbotlist", "discordbotlist.com"])
        .with_display_name("Discord Bot List")
        .with_website_url("https://discordbotlist.com")
        .with_base_url("https://discordbotlist.com/api")
        .with_requires_token(true)
        .with_post_formatter(format)
}

/// `guilds`, plus `shard_id`, `users` and `voice_connections` when supplied
pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    let mut body = body_with_servers("guilds", options);
    if let Some(shard) = options.shard {
        body.insert("shard_id".to_string(), shard.id.into());
    }
    insert_count(&mut body, "users", options.user_count.as_ref());
    insert_count(
        &mut body,
        "voice_connections",
        options.voice_connections.as_ref(),
    );

    Ok(RequestForm::post(format!("/bots/{id}/stats"))
        .with_bot_authorization(token(options))
        .with_body(Value::Object(body)))
}
