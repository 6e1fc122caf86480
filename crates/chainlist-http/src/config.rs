//! Configuration for [`HttpRegistrySource`](crate::HttpRegistrySource).

use std::time::Duration;

use chainlist_core::RegistryError;

/// Public Chainlist dataset maintained by DefiLlama.
pub const CHAINLIST_RPCS_URL: &str = "https://chainlist.org/rpcs.json";

/// Environment variable overriding the registry URL.
pub const ENV_URL: &str = "CHAINLIST_URL";
/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "CHAINLIST_TIMEOUT_SECS";

/// Configuration for the HTTP registry source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    pub url: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            url: CHAINLIST_RPCS_URL.into(),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("chainlist/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpSourceConfig {
    /// Defaults, overridden by `CHAINLIST_URL` and `CHAINLIST_TIMEOUT_SECS`
    /// when set.
    pub fn from_env() -> Result<Self, RegistryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RegistryError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_URL).filter(|u| !u.trim().is_empty()) {
            config.url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = parse_timeout_secs(&raw)?;
        }
        Ok(config)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Parse a positive number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, RegistryError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(RegistryError::Config(format!(
            "{ENV_TIMEOUT_SECS} must be a positive integer, got {raw:?}"
        ))),
    }
}
