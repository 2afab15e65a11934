//! Glenn Bot List
//!
//! The token travels in the body as `authorization`, not as a header.

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::json;

use super::helpers::{client_id, token};

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("glennbotlist")
        .with_aliases(["glennbotlist", "glennbotlist.xyz"])
        .with_display_name("Glenn Bot List")
        .with_website_url("https://glennbotlist.xyz")
        .with_base_url("https://glennbotlist.xyz/api")
        .with_requires_token(true)
        .with_post_formatter(format)
}

pub fn format(options: &PostOptions) -> FormatResult {
    let id = client_id(options)?;
    Ok(
        RequestForm::post(format!("/post/stats/bot/{id}")).with_body(json!({
            "serverCount": options.server_count.total(),
            "authorization": token(options),
        })),
    )
}
