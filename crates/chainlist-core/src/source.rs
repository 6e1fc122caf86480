//! The `RegistrySource` trait — where registry payloads come from.

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::types::RawRegistry;

/// A place the chain registry can be fetched from.
///
/// `chainlist-http` provides the HTTP implementation; tests plug in
/// in-memory sources. The trait is object-safe and can be stored as
/// `Arc<dyn RegistrySource>`.
#[async_trait]
pub trait RegistrySource: Send + Sync + 'static {
    /// Fetch and decode the full registry payload. One request, no retry.
    async fn fetch(&self) -> Result<RawRegistry, RegistryError>;

    /// Identifier of this source (URL or name), used in logs and errors.
    fn url(&self) -> &str;
}

/// A source that always returns the same payload. Useful for fixtures and
/// offline use.
pub struct StaticSource {
    name: String,
    raw: RawRegistry,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, raw: RawRegistry) -> Self {
        Self { name: name.into(), raw }
    }

    /// Build a source from JSON text.
    pub fn from_json(name: impl Into<String>, text: &str) -> Result<Self, RegistryError> {
        Ok(Self::new(name, RawRegistry::from_json(text)?))
    }
}

#[async_trait]
impl RegistrySource for StaticSource {
    async fn fetch(&self) -> Result<RawRegistry, RegistryError> {
        Ok(self.raw.clone())
    }

    fn url(&self) -> &str {
        &self.name
    }
}
