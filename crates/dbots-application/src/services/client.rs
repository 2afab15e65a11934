//! Service client
//!
//! Binds a descriptor to a token and a transport so read operations can be
//! issued against a service with the descriptor's base URL and token rules.

use std::sync::Arc;

use dbots_domain::error::{Error, Result};
use dbots_domain::ports::HttpTransport;
use dbots_domain::value_objects::{PostOptions, RequestForm, ServiceResponse};

use super::descriptor::{ServiceDescriptor, dispatch};

/// Per-call options for [`ServiceClient::request`]
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    /// Override the descriptor's token requirement for this call
    pub requires_token: Option<bool>,
    /// Prepend the descriptor's base URL to relative URLs
    pub append_base_url: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            requires_token: None,
            append_base_url: true,
        }
    }
}

impl RequestOptions {
    /// Require a token regardless of the descriptor
    #[must_use]
    pub fn requiring_token(mut self) -> Self {
        self.requires_token = Some(true);
        self
    }

    /// Send the URL as-is, without the base URL
    #[must_use]
    pub fn without_base_url(mut self) -> Self {
        self.append_base_url = false;
        self
    }
}

/// A service descriptor bound to a token and transport
#[derive(Clone)]
pub struct ServiceClient {
    descriptor: ServiceDescriptor,
    token: Option<String>,
    transport: Arc<dyn HttpTransport>,
}

impl ServiceClient {
    /// Create a client for a descriptor
    pub fn new(
        descriptor: ServiceDescriptor,
        token: Option<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            descriptor,
            token,
            transport,
        }
    }

    /// The bound descriptor
    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    /// The bound token, treating an empty string as absent
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    /// Validate and compose a caller-built form without sending it
    pub fn prepare_request(&self, form: RequestForm, options: RequestOptions) -> Result<RequestForm> {
        if !self.descriptor.is_resolvable() {
            return Err(Error::called_from_base("request"));
        }
        let required = options
            .requires_token
            .unwrap_or(self.descriptor.requires_token);
        self.descriptor.check_token(self.token(), required)?;
        self.descriptor.compose(form, options.append_base_url)
    }

    /// Send a caller-built form to this service
    pub async fn request(
        &self,
        form: RequestForm,
        options: RequestOptions,
    ) -> Result<ServiceResponse> {
        let form = self.prepare_request(form, options)?;
        dispatch(&self.descriptor.key, self.transport.as_ref(), &form).await
    }

    /// Post statistics, filling in the bound token when the options have none
    pub async fn post(&self, mut options: PostOptions) -> Result<ServiceResponse> {
        if options.token().is_none() {
            options.token = self.token.clone();
        }
        self.descriptor
            .post(self.transport.as_ref(), &options)
            .await
    }

    /// Fetch the listing entry of a bot on this service
    pub async fn get_bot(&self, id: &str) -> Result<ServiceResponse> {
        let lookup = self
            .descriptor
            .bot_lookup
            .as_ref()
            .ok_or_else(|| Error::unsupported(self.descriptor.key.as_ref(), "bot lookup"))?;
        if id.is_empty() {
            return Err(Error::invalid_options(
                self.descriptor.key.as_ref(),
                "id",
                "must not be empty",
            ));
        }

        // The lookup builder attaches the token itself when the list wants one.
        let form = lookup(id, self.token());
        let options = RequestOptions {
            requires_token: Some(false),
            ..Default::default()
        };
        self.request(form, options).await
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.descriptor.key)
            .field("has_token", &self.token().is_some())
            .field("transport", &self.transport.transport_name())
            .finish()
    }
}
