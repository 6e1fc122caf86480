//! HTTP registry source backed by `reqwest`.

use async_trait::async_trait;

use chainlist_core::{RawRegistry, RegistryError, RegistrySource};

use crate::config::HttpSourceConfig;

/// Fetches the registry with a single `GET` per call.
///
/// Connection failures, non-2xx responses and timeouts surface as
/// [`RegistryError::Unavailable`] / [`RegistryError::Timeout`]. No retry.
pub struct HttpRegistrySource {
    url: String,
    http: reqwest::Client,
    timeout_ms: u64,
}

impl HttpRegistrySource {
    /// Build a source from configuration.
    pub fn new(config: HttpSourceConfig) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| RegistryError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: config.url,
            http,
            timeout_ms: config.request_timeout.as_millis() as u64,
        })
    }

    fn map_err(&self, e: reqwest::Error) -> RegistryError {
        if e.is_timeout() {
            RegistryError::Timeout { url: self.url.clone(), ms: self.timeout_ms }
        } else {
            RegistryError::Unavailable { url: self.url.clone(), reason: e.to_string() }
        }
    }
}

#[async_trait]
impl RegistrySource for HttpRegistrySource {
    async fn fetch(&self) -> Result<RawRegistry, RegistryError> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_err(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RegistryError::Unavailable {
                url: self.url.clone(),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = resp.bytes().await.map_err(|e| self.map_err(e))?;
        tracing::debug!(url = %self.url, bytes = body.len(), "registry payload received");

        RawRegistry::from_slice(&body)
    }

    fn url(&self) -> &str {
        &self.url
    }
}
