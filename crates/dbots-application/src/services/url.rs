//! URL composition and query building

use std::collections::BTreeMap;

use dbots_domain::constants::ABSOLUTE_URL_SCHEMES;
use dbots_domain::error::{Error, Result};
use url::Url;

/// Whether `url` starts with `http://` or `https://` (case-insensitive)
pub fn is_absolute_url(url: &str) -> bool {
    ABSOLUTE_URL_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Produce the final absolute URL for a request
///
/// `base_url` is prepended only when `append_base_url` is set, the base is
/// non-empty, and `url` is not already absolute. Query parameters are
/// URL-encoded and appended after any query already present. The result is
/// always in normalized form, with or without a query.
pub fn compose_url(
    url: &str,
    base_url: &str,
    query: Option<&BTreeMap<String, String>>,
    append_base_url: bool,
) -> Result<String> {
    let joined = if append_base_url && !base_url.is_empty() && !is_absolute_url(url) {
        format!("{base_url}{url}")
    } else {
        url.to_string()
    };

    let mut parsed = Url::parse(&joined).map_err(|e| Error::invalid_url(&joined, e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::invalid_url(joined, "only http and https URLs are supported"));
    }

    if let Some(query) = query.filter(|query| !query.is_empty()) {
        let mut pairs = parsed.query_pairs_mut();
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }
    Ok(parsed.into())
}
