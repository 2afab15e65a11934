//! Space Bots List
//!
//! Shard data is not accepted by this list.
//!
//! See <https://spacebots.gitbook.io/tutorial-en/>

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, insert_count, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("spacebotslist")
        .with_aliases(["spacebotslist", "space-bot-list.xyz"])
        .with_display_name("Space Bots List")
        .with_website_url("https://space-bot-list.xyz/")
        .with_logo_url(
            "https://cdn.discordapp.com/avatars/546742409409593354/123b9b0a54b45d99627215c7154580af.webp?size=256",
        )
        .with_base_url("https://space-bot-list.xyz/api")
        .with_requires_token(true)
        .with_post_formatter(format)
        .with_bot_lookup(|id, _| RequestForm::get(format!("/bots/{id}")))
}

/// `guilds`, plus `users` when supplied
pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    let mut body = body_with_servers("guilds", options);
    insert_count(&mut body, "users", options.user_count.as_ref());

    Ok(RequestForm::post(format!("/bots/{id}"))
        .with_authorization(token(options))
        .with_body(Value::Object(body)))
}
