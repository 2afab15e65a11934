//! Service descriptor contract
//!
//! A [`ServiceDescriptor`] describes one bot-list integration: the aliases it
//! is looked up by, the base URL of its API, whether it needs a token, and
//! the formatter that turns [`PostOptions`] into a [`RequestForm`].
//!
//! A descriptor without aliases or a post formatter is the inert base
//! contract. The registry never returns one, and calling `post` on one
//! fails with [`Error::CalledFromBase`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use dbots_domain::error::{Error, Result};
use dbots_domain::ports::HttpTransport;
use dbots_domain::value_objects::{PostOptions, RequestForm, ServiceResponse};
use tracing::{debug, warn};

use super::url::compose_url;

/// Rejection raised by a formatter for a single option field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending option field
    pub field: &'static str,
    /// Description of the problem
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The field was missing or empty
    pub fn required(field: &'static str) -> Self {
        Self::new(field, "must not be empty")
    }
}

/// Result of a post formatter
pub type FormatResult = std::result::Result<RequestForm, FieldError>;

/// Pure mapping from post options to a provider-specific request
pub type PostFormatter = Arc<dyn Fn(&PostOptions) -> FormatResult + Send + Sync>;

/// Builds the request that fetches one bot's listing entry
///
/// Receives the bot ID and the client's token, if any.
pub type BotLookup = Arc<dyn Fn(&str, Option<&str>) -> RequestForm + Send + Sync>;

/// One bot-list integration
#[derive(Clone, Default)]
pub struct ServiceDescriptor {
    /// Canonical key (e.g. "topgg")
    pub key: Cow<'static, str>,
    /// Case-insensitive lookup names
    pub aliases: Vec<Cow<'static, str>>,
    /// Human-readable name, documentation only
    pub display_name: Cow<'static, str>,
    /// Website URL, documentation only
    pub website_url: Cow<'static, str>,
    /// Logo URL, documentation only
    pub logo_url: Option<Cow<'static, str>>,
    /// Prepended to relative formatter URLs; empty means none
    pub base_url: Cow<'static, str>,
    /// Whether `post`/`request` need a token
    pub requires_token: bool,
    /// Kept only for backwards compatibility with an older name
    pub deprecated: bool,
    /// Formatter for statistics submissions
    pub post_formatter: Option<PostFormatter>,
    /// Builder for the bot listing lookup, when the service has one
    pub bot_lookup: Option<BotLookup>,
}

impl ServiceDescriptor {
    /// The inert base contract: no aliases, no formatter
    pub fn base() -> Self {
        Self::default()
    }

    /// Start a descriptor for the given canonical key
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set the aliases
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the website URL
    #[must_use]
    pub fn with_website_url(mut self, url: impl Into<Cow<'static, str>>) -> Self {
        self.website_url = url.into();
        self
    }

    /// Set the logo URL
    #[must_use]
    pub fn with_logo_url(mut self, url: impl Into<Cow<'static, str>>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<Cow<'static, str>>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set whether a token is required
    #[must_use]
    pub fn with_requires_token(mut self, requires_token: bool) -> Self {
        self.requires_token = requires_token;
        self
    }

    /// Mark the descriptor as deprecated
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Set the post formatter from a function or closure
    #[must_use]
    pub fn with_post_formatter<F>(self, formatter: F) -> Self
    where
        F: Fn(&PostOptions) -> FormatResult + Send + Sync + 'static,
    {
        self.with_shared_formatter(Arc::new(formatter))
    }

    /// Set an already shared post formatter
    ///
    /// Two descriptors holding the same `Arc` always produce the same output.
    #[must_use]
    pub fn with_shared_formatter(mut self, formatter: PostFormatter) -> Self {
        self.post_formatter = Some(formatter);
        self
    }

    /// Set the bot lookup builder
    #[must_use]
    pub fn with_bot_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> RequestForm + Send + Sync + 'static,
    {
        self.bot_lookup = Some(Arc::new(lookup));
        self
    }

    /// Whether the registry may return this descriptor
    pub fn is_resolvable(&self) -> bool {
        !self.aliases.is_empty() && self.post_formatter.is_some()
    }

    /// Case-insensitive alias match
    pub fn matches(&self, key: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(key))
    }

    /// Fail with `RequiresToken` when `required` and no token is present
    pub fn check_token(&self, token: Option<&str>, required: bool) -> Result<()> {
        if required && token.is_none_or(str::is_empty) {
            return Err(Error::requires_token(self.key.as_ref()));
        }
        Ok(())
    }

    /// Run the formatter, validating the token requirement first
    ///
    /// The returned form's URL is not yet composed with the base URL.
    pub fn format_post(&self, options: &PostOptions) -> Result<RequestForm> {
        let formatter = match &self.post_formatter {
            Some(formatter) if self.is_resolvable() => formatter,
            _ => return Err(Error::called_from_base("post")),
        };
        self.check_token(options.token(), self.requires_token)?;

        formatter(options).map_err(|err| {
            Error::invalid_options(self.key.as_ref(), err.field, err.message)
        })
    }

    /// Build the final request for a post without sending it
    pub fn prepare_post(&self, options: &PostOptions) -> Result<RequestForm> {
        let form = self.format_post(options)?;
        self.compose(form, true)
    }

    /// Resolve the form's URL against this service's base URL
    ///
    /// Query parameters are folded into the URL and cleared from the form.
    /// Composition failures are attributed to this service.
    pub fn compose(&self, mut form: RequestForm, append_base_url: bool) -> Result<RequestForm> {
        form.url = compose_url(
            &form.url,
            &self.base_url,
            form.query.as_ref(),
            append_base_url,
        )
        .map_err(|err| err.for_service(&self.key))?;
        form.query = None;
        Ok(form)
    }

    /// Post statistics to this service
    pub async fn post(
        &self,
        transport: &dyn HttpTransport,
        options: &PostOptions,
    ) -> Result<ServiceResponse> {
        let form = self.prepare_post(options)?;
        dispatch(&self.key, transport, &form).await
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("key", &self.key)
            .field("aliases", &self.aliases)
            .field("display_name", &self.display_name)
            .field("base_url", &self.base_url)
            .field("requires_token", &self.requires_token)
            .field("deprecated", &self.deprecated)
            .field("post_formatter", &self.post_formatter.is_some())
            .field("bot_lookup", &self.bot_lookup.is_some())
            .finish_non_exhaustive()
    }
}

/// Send a composed form through the transport, attributing errors to `service`
pub async fn dispatch(
    service: &str,
    transport: &dyn HttpTransport,
    form: &RequestForm,
) -> Result<ServiceResponse> {
    debug!(
        service,
        method = %form.method,
        url = %form.url,
        transport = transport.transport_name(),
        "Dispatching request"
    );

    match transport.execute(form).await {
        Ok(response) => {
            debug!(service, status = response.status, "Request succeeded");
            Ok(response)
        }
        Err(err) => {
            let err = err.for_service(service);
            warn!(service, status = ?err.status(), error = %err, "Request failed");
            Err(err)
        }
    }
}
