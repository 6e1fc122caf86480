//! Caching registry client.
//!
//! The client owns a [`RegistrySource`] and caches the last snapshot it
//! fetched. Read operations fetch on first use; after that they are served
//! from the cache until [`ChainlistClient::fetch_all_chains`] or
//! [`ChainlistClient::clear`] is called. Nothing expires on its own.
//!
//! Fetch failures propagate from every operation. A failed fetch leaves the
//! cache untouched, so the next call tries again.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use tokio::sync::Mutex;

use crate::error::RegistryError;
use crate::registry::ChainRegistry;
use crate::source::RegistrySource;
use crate::types::ChainRecord;

struct Inner {
    source: Arc<dyn RegistrySource>,
    cache: RwLock<Option<Arc<ChainRegistry>>>,
    /// Serialises the fetch-if-empty path so concurrent first readers share
    /// one request.
    fetch_lock: Mutex<()>,
}

/// Chain registry client with an in-memory snapshot cache.
///
/// Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct ChainlistClient {
    inner: Arc<Inner>,
}

impl ChainlistClient {
    /// Create a client with an empty cache.
    pub fn new(source: Arc<dyn RegistrySource>) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                cache: RwLock::new(None),
                fetch_lock: Mutex::new(()),
            }),
        }
    }

    /// Identifier of the underlying source.
    pub fn source_url(&self) -> &str {
        self.inner.source.url()
    }

    /// Fetch the registry now, replacing any cached snapshot.
    pub async fn fetch_all_chains(&self) -> Result<Arc<ChainRegistry>, RegistryError> {
        let url = self.inner.source.url();
        tracing::debug!(url, "fetching chain registry");
        let start = Instant::now();

        let raw = match self.inner.source.fetch().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(url, error = %e, "chain registry fetch failed");
                return Err(e);
            }
        };

        let registry = Arc::new(ChainRegistry::new(raw));
        tracing::info!(
            url,
            chains = registry.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "chain registry loaded"
        );

        *self.inner.cache.write().unwrap_or_else(PoisonError::into_inner) =
            Some(Arc::clone(&registry));
        Ok(registry)
    }

    /// The cached snapshot, if one has been loaded.
    pub fn cached(&self) -> Option<Arc<ChainRegistry>> {
        self.inner
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the cached snapshot; the next read fetches again.
    pub fn clear(&self) {
        *self.inner.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The cached snapshot, fetching it first if the cache is empty.
    pub async fn registry(&self) -> Result<Arc<ChainRegistry>, RegistryError> {
        if let Some(registry) = self.cached() {
            return Ok(registry);
        }

        let _guard = self.inner.fetch_lock.lock().await;
        // Another caller may have filled the cache while we waited.
        if let Some(registry) = self.cached() {
            tracing::debug!("chain registry loaded by concurrent caller");
            return Ok(registry);
        }
        self.fetch_all_chains().await
    }

    pub async fn get_chain_by_id(&self, chain_id: u64) -> Result<Option<ChainRecord>, RegistryError> {
        Ok(self.registry().await?.get_chain_by_id(chain_id).cloned())
    }

    pub async fn get_rpc_endpoints(&self, chain_id: u64) -> Result<Vec<String>, RegistryError> {
        Ok(self.registry().await?.get_rpc_endpoints(chain_id))
    }

    pub async fn get_http_endpoints(&self, chain_id: u64) -> Result<Vec<String>, RegistryError> {
        Ok(self.registry().await?.get_http_endpoints(chain_id))
    }

    pub async fn get_best_rpc(&self, chain_id: u64) -> Result<Option<String>, RegistryError> {
        Ok(self.registry().await?.get_best_rpc(chain_id))
    }

    pub async fn search_chains(&self, query: &str) -> Result<Vec<ChainRecord>, RegistryError> {
        Ok(self.registry().await?.search_chains(query))
    }

    pub async fn get_supported_chains(&self) -> Result<Vec<u64>, RegistryError> {
        Ok(self.registry().await?.get_supported_chains())
    }

    /// Batch lookup; `None` marks chains missing from the registry.
    pub async fn get_chains(
        &self,
        chain_ids: &[u64],
    ) -> Result<Vec<(u64, Option<ChainRecord>)>, RegistryError> {
        let registry = self.registry().await?;
        Ok(registry
            .get_chains(chain_ids)
            .into_iter()
            .map(|(id, chain)| (id, chain.cloned()))
            .collect())
    }
}
