//! HTTP bridge to the SDK core
//!
//! Each request is a `POST {endpoint}/{function}` with the params record as
//! the JSON body. A 2xx response carries the result record; any other status
//! carries the core's error record.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::transport::CoreTransport;
use crate::domain::{CoreError, Error};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport that posts requests to an HTTP bridge in front of the core
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Base url, without a trailing slash
    endpoint: String,
    client: Client,
}

#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    endpoint: String,
    timeout: Duration,
    headers: HeaderMap,
}

impl HttpTransportBuilder {
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        Self {
            endpoint: endpoint.as_ref().to_string(),
            ..Default::default()
        }
    }

    /// Time limit for a whole request, including reading the response
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> anyhow::Result<Self> {
        let name = name.as_ref();
        self.headers.insert(
            HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("invalid header name '{}'", name))?,
            HeaderValue::from_str(value.as_ref())
                .with_context(|| format!("invalid value for header '{}'", name))?,
        );
        Ok(self)
    }

    pub fn build(self) -> Result<HttpTransport, Error> {
        let client = Client::builder()
            .timeout(self.timeout)
            .default_headers(self.headers)
            .build()
            .map_err(Error::transport)?;

        Ok(HttpTransport {
            endpoint: self.endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: HeaderMap::new(),
        }
    }
}

impl HttpTransport {
    pub fn builder(endpoint: impl AsRef<str>) -> HttpTransportBuilder {
        HttpTransportBuilder::new(endpoint)
    }

    fn url_for(&self, function: &str) -> String {
        format!("{}/{}", self.endpoint, function)
    }
}

#[async_trait]
impl CoreTransport for HttpTransport {
    async fn request(&self, function: &str, params: Value) -> Result<Value, Error> {
        let url = self.url_for(function);
        debug!(%url, "posting core request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&params)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("reading response from {} failed", url))
            .map_err(Error::Transport)?;

        if status.is_success() {
            return serde_json::from_str(&body)
                .with_context(|| format!("{} returned a non-JSON result", function))
                .map_err(Error::Transport);
        }

        match serde_json::from_str::<CoreError>(&body) {
            Ok(core_error) => {
                debug!(function, code = core_error.code, %status, "core rejected request");
                Err(core_error.into())
            }
            Err(_) => Err(Error::Transport(anyhow!(
                "{} returned {} without an error record: {}",
                function,
                status,
                body
            ))),
        }
    }

    fn endpoint_name(&self) -> String {
        self.endpoint.clone()
    }
}
