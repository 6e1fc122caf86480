//! chainlist-http — HTTP registry source for Chainlist.
//!
//! # Quick start
//! ```rust,no_run
//! # async fn run() -> Result<(), chainlist_core::RegistryError> {
//! let client = chainlist_http::chainlist_client()?;
//! let rpc = client.get_best_rpc(42161).await?; // Arbitrum One
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod source;

use std::sync::Arc;

use chainlist_core::{ChainlistClient, RegistryError};

pub use config::{HttpSourceConfig, CHAINLIST_RPCS_URL};
pub use source::HttpRegistrySource;

/// Client for the given configuration.
pub fn client(config: HttpSourceConfig) -> Result<ChainlistClient, RegistryError> {
    Ok(ChainlistClient::new(Arc::new(HttpRegistrySource::new(config)?)))
}

/// Client for the public Chainlist endpoint with default settings.
pub fn chainlist_client() -> Result<ChainlistClient, RegistryError> {
    client(HttpSourceConfig::default())
}

/// One-shot: preferred RPC endpoint for a chain from the public registry.
///
/// Builds a fresh client, so every call fetches the full registry. Hold a
/// [`ChainlistClient`] for repeated lookups.
pub async fn get_rpc_for_chain(chain_id: u64) -> Result<Option<String>, RegistryError> {
    chainlist_client()?.get_best_rpc(chain_id).await
}

/// One-shot: every RPC endpoint for a chain from the public registry.
pub async fn get_all_rpcs_for_chain(chain_id: u64) -> Result<Vec<String>, RegistryError> {
    chainlist_client()?.get_rpc_endpoints(chain_id).await
}
