//! Discord Apps (discordapps.dev)

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::json;

use super::helpers::{client_id, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("discordappsdev")
        .with_aliases(["discordappsdev", "discordapps.dev"])
        .with_display_name("Discord Apps")
        .with_website_url("https://discordapps.dev")
        .with_base_url("https://api.discordapps.dev/api/v2")
        .with_requires_token(true)
        .with_post_formatter(format)
}

/// The count is nested: `{ "bot": { "count": n } }`. No shard support.
pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    Ok(RequestForm::post(format!("/bots/{id}"))
        .with_authorization(token(options))
        .with_body(json!({ "bot": { "count": options.server_count.total() } })))
}
