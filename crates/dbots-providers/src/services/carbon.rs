//! Carbonitex
//!
//! Carbon takes the key in the body and has a single fixed endpoint, so the
//! formatter returns an absolute URL and the descriptor has no base URL.

use dbots_application::{FormatResult, ServiceDescriptor};
use dbots_domain::value_objects::{PostOptions, RequestForm};
use serde_json::json;

use super::helpers::token;

const ENDPOINT: &str = "https://www.carbonitex.net/discord/data/botdata.php";

pub fn descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new("carbon")
        .with_aliases(["carbon", "carbonitex", "carbonitex.net"])
        .with_display_name("Carbonitex")
        .with_website_url("https://www.carbonitex.net")
        .with_requires_token(true)
        .with_post_formatter(format)
}

/// The client ID is not part of the request.
pub fn format(options: &PostOptions) -> FormatResult {
    Ok(RequestForm::post(ENDPOINT).with_body(json!({
        "key": token(options),
        "servercount": options.server_count.total(),
    })))
}
