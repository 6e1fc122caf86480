//! Registry error types.

use thiserror::Error;

/// Errors that can occur while loading the chain registry.
///
/// Malformed chain entries are never reported here; they are skipped during
/// normalization.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Registry endpoint unreachable or returned a non-success status.
    #[error("registry unavailable at {url}: {reason}")]
    Unavailable { url: String, reason: String },

    /// Request timed out after the configured duration.
    #[error("registry request to {url} timed out after {ms}ms")]
    Timeout { url: String, ms: u64 },

    /// Payload was neither a list nor a mapping of chain objects.
    #[error("invalid registry payload: {0}")]
    Decode(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RegistryError {
    /// Returns `true` if the registry could not be reached at all
    /// (connection failure, bad status or timeout).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_counts_as_unavailable() {
        let e = RegistryError::Timeout { url: "https://x".into(), ms: 30_000 };
        assert!(e.is_unavailable());
        assert_eq!(e.to_string(), "registry request to https://x timed out after 30000ms");
    }

    #[test]
    fn decode_is_not_unavailable() {
        let e = RegistryError::Decode("expected list".into());
        assert!(!e.is_unavailable());
    }
}
