//! Custom services
//!
//! Bot lists that are not built in can be described in configuration and
//! turned into descriptors at startup. They take part in alias resolution
//! after the built-ins.
//!
//! ```toml
//! [[poster.custom_services]]
//! key = "mylist"
//! aliases = ["mylist", "mylist.example"]
//! base_url = "https://mylist.example/api"
//! url = "/bots/{client_id}/stats"
//! auth = "bot_header"
//! server_count_field = "guilds"
//! ```

use std::sync::Arc;

use dbots_application::services::is_absolute_url;
use dbots_application::{FieldError, FormatResult, ServiceDescriptor};
use dbots_domain::error::{Error, Result};
use dbots_domain::value_objects::{Method, PostOptions, RequestForm};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::helpers::{body_with_servers, client_id, insert_count, token};
use crate::constants::{CLIENT_ID_PLACEHOLDER, DEFAULT_SERVER_COUNT_FIELD};

/// Where the token is placed in a custom service's request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStyle {
    /// `Authorization: <token>`
    #[default]
    Header,
    /// `Authorization: Bot <token>`
    BotHeader,
    /// A body field named by `token_field`
    Body,
    /// No token is sent
    None,
}

fn default_server_count_field() -> String {
    DEFAULT_SERVER_COUNT_FIELD.to_string()
}

fn default_token_field() -> String {
    "authorization".to_string()
}

fn default_true() -> bool {
    true
}

fn default_method() -> Method {
    Method::Post
}

/// Configuration-supplied description of a bot list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomServiceDefinition {
    /// Canonical key
    pub key: String,
    /// Lookup names; the key alone when empty
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Human-readable name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Prepended to a relative `url`
    #[serde(default)]
    pub base_url: String,
    /// Path or absolute URL; `{client_id}` is substituted
    pub url: String,
    /// HTTP method; GET sends the fields as query parameters
    #[serde(default = "default_method")]
    pub method: Method,
    /// Token placement
    #[serde(default)]
    pub auth: AuthStyle,
    /// Body field for [`AuthStyle::Body`]
    #[serde(default = "default_token_field")]
    pub token_field: String,
    /// Whether posts need a token
    #[serde(default = "default_true")]
    pub requires_token: bool,
    /// Body field for the server count
    #[serde(default = "default_server_count_field")]
    pub server_count_field: String,
    /// Body field for the user count, omitted when unset
    #[serde(default)]
    pub user_count_field: Option<String>,
    /// Body field for the voice connection count, omitted when unset
    #[serde(default)]
    pub voice_connections_field: Option<String>,
    /// Body field for the shard ID, omitted when unset
    #[serde(default)]
    pub shard_id_field: Option<String>,
    /// Body field for the shard count, omitted when unset
    #[serde(default)]
    pub shard_count_field: Option<String>,
}

impl CustomServiceDefinition {
    /// Minimal definition posting `server_count` with header auth
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            aliases: Vec::new(),
            display_name: None,
            base_url: String::new(),
            url: url.into(),
            method: default_method(),
            auth: AuthStyle::default(),
            token_field: default_token_field(),
            requires_token: true,
            server_count_field: default_server_count_field(),
            user_count_field: None,
            voice_connections_field: None,
            shard_id_field: None,
            shard_count_field: None,
        }
    }

    /// Check the definition can produce a usable descriptor
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(Error::config("custom service key must not be empty"));
        }
        if self.url.trim().is_empty() {
            return Err(Error::config(format!(
                "custom service \"{}\" has no url",
                self.key
            )));
        }
        if !self.base_url.is_empty() && !is_absolute_url(&self.base_url) {
            return Err(Error::config(format!(
                "custom service \"{}\" has a base_url that is not an absolute http(s) URL",
                self.key
            )));
        }
        if self.base_url.is_empty() && !is_absolute_url(&self.url) {
            return Err(Error::config(format!(
                "custom service \"{}\" has a relative url and no base_url",
                self.key
            )));
        }
        if self.server_count_field.is_empty() {
            return Err(Error::config(format!(
                "custom service \"{}\" has an empty server_count_field",
                self.key
            )));
        }
        Ok(())
    }

    /// Build the descriptor for this definition
    pub fn into_descriptor(self) -> Result<ServiceDescriptor> {
        self.validate()?;

        let aliases = if self.aliases.is_empty() {
            vec![self.key.clone()]
        } else {
            self.aliases.clone()
        };
        let display_name = self.display_name.clone().unwrap_or_else(|| self.key.clone());
        let key = self.key.clone();
        let base_url = self.base_url.clone();
        let requires_token = self.requires_token && self.auth != AuthStyle::None;
        let definition = Arc::new(self);

        Ok(ServiceDescriptor::new(key)
            .with_aliases(aliases)
            .with_display_name(display_name)
            .with_base_url(base_url)
            .with_requires_token(requires_token)
            .with_post_formatter(move |options| definition.format(options)))
    }

    fn format(&self, options: &PostOptions) -> FormatResult {
        let url = if self.url.contains(CLIENT_ID_PLACEHOLDER) {
            self.url.replace(CLIENT_ID_PLACEHOLDER, client_id(options)?)
        } else {
            self.url.clone()
        };

        let mut body = body_with_servers(&self.server_count_field, options);
        if let Some(field) = &self.user_count_field {
            insert_count(&mut body, field, options.user_count.as_ref());
        }
        if let Some(field) = &self.voice_connections_field {
            insert_count(&mut body, field, options.voice_connections.as_ref());
        }
        if let Some(shard) = options.shard {
            if let Some(field) = &self.shard_id_field {
                body.insert(field.clone(), shard.id.into());
            }
            if let Some(field) = &self.shard_count_field {
                body.insert(field.clone(), shard.count.into());
            }
        }

        let token = token(options);
        let mut form = RequestForm::new(self.method, url);
        match self.auth {
            AuthStyle::Header => form = form.with_authorization(token),
            AuthStyle::BotHeader => form = form.with_bot_authorization(token),
            AuthStyle::Body => {
                if self.token_field.is_empty() {
                    return Err(FieldError::new("token", "no body field configured"));
                }
                body.insert(self.token_field.clone(), Value::from(token));
            }
            AuthStyle::None => {}
        }

        if self.method == Method::Get {
            return Ok(body
                .into_iter()
                .fold(form, |form, (name, value)| match value {
                    Value::String(value) => form.with_query(name, value),
                    value => form.with_query(name, value.to_string()),
                }));
        }
        Ok(form.with_body(Value::Object(body)))
    }
}

/// Build descriptors for a set of definitions, failing on the first invalid one
pub fn build_custom_services(
    definitions: impl IntoIterator<Item = CustomServiceDefinition>,
) -> Result<Vec<ServiceDescriptor>> {
    definitions
        .into_iter()
        .map(CustomServiceDefinition::into_descriptor)
        .collect()
}
