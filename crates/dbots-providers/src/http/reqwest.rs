//! reqwest-backed transport

use async_trait::async_trait;
use dbots_domain::error::{Error, Result};
use dbots_domain::ports::HttpTransport;
use dbots_domain::value_objects::{Method, RequestForm, ServiceResponse};
use reqwest::Client;
use tracing::trace;

use super::provider::HttpClientConfig;
use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;
use crate::utils::HttpResponseUtils;

/// Sends request forms with a pooled [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: HttpClientConfig,
}

impl ReqwestTransport {
    /// Build a transport from configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .tcp_keepalive(config.keepalive)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to build HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client, config: HttpClientConfig) -> Self {
        Self { client, config }
    }

    /// The configuration this transport was built with
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    /// Query parameters are expected to be folded into `form.url` already.
    async fn execute(&self, form: &RequestForm) -> Result<ServiceResponse> {
        let mut request = self
            .client
            .request(Self::method(form.method), form.url.as_str());
        for (name, value) in &form.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &form.body {
            request = request.json(body);
        }

        trace!(method = %form.method, url = %form.url, "Sending HTTP request");
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::transport(
                    "",
                    format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.config.timeout),
                )
            } else {
                Error::transport_with_source("", "HTTP request failed", e)
            }
        })?;

        HttpResponseUtils::into_service_response(response).await
    }

    fn transport_name(&self) -> &str {
        "reqwest"
    }
}
