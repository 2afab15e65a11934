//! Domain constants
//!
//! Header names and content types shared by every service formatter.

/// Authorization header name, in the casing the providers document
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Content-Type header name
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Prefix some providers expect in front of the token
pub const BOT_TOKEN_PREFIX: &str = "Bot ";

/// URL schemes that mark a formatter-produced URL as already absolute
pub const ABSOLUTE_URL_SCHEMES: [&str; 2] = ["http://", "https://"];
