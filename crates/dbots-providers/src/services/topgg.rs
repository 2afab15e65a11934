//! Top.gg
//!
//! Also serves the deprecated `discordbotsorg` key, which shares this
//! module's formatter.
//!
//! See <https://docs.top.gg/api/bot/#post-stats>

use dbots_application::{FormatResult, PostFormatter, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, token};

const BASE_URL: &str = "https://top.gg/api";

/// Top.gg descriptor
pub fn descriptor(formatter: PostFormatter) -> ServiceDescriptor {
    ServiceDescriptor::new("topgg")
        .with_aliases(["topgg", "top.gg"])
        .with_display_name("Top.gg")
        .with_website_url("https://top.gg")
        .with_base_url(BASE_URL)
        .with_requires_token(true)
        .with_shared_formatter(formatter)
        .with_bot_lookup(bot_lookup)
}

/// Discord Bots (discordbots.org), the former name of Top.gg
pub fn deprecated_descriptor(formatter: PostFormatter) -> ServiceDescriptor {
    ServiceDescriptor::new("discordbotsorg")
        .with_aliases(["discordbotsorg", "discordbots.org"])
        .with_display_name("Discord Bots")
        .with_website_url("https://top.gg")
        .with_base_url(BASE_URL)
        .with_requires_token(true)
        .deprecated()
        .with_shared_formatter(formatter)
        .with_bot_lookup(bot_lookup)
}

/// `GET /bots/{id}`, authorized when a token is bound
pub fn bot_lookup(id: &str, token: Option<&str>) -> RequestForm {
    let form = RequestForm::get(format!("/bots/{id}"));
    match token {
        Some(token) => form.with_authorization(token),
        None => form,
    }
}

/// `POST /bots/{id}/stats` with `server_count` and optional `shard_id`/`shard_count`
pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    let mut body = body_with_servers("server_count", options);
    if let Some(shard) = options.shard {
        body.insert("shard_id".to_string(), shard.id.into());
        body.insert("shard_count".to_string(), shard.count.into());
    }

    Ok(RequestForm::post(format!("/bots/{id}/stats"))
        .with_authorization(token(options))
        .with_body(Value::Object(body)))
}
