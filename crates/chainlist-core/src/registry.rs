//! Immutable registry snapshot and the queries served from it.

use std::collections::BTreeSet;

use crate::normalize::normalize_entry;
use crate::selection::{http_endpoints, select_best_rpc};
use crate::types::{ChainRecord, RawRegistry};

/// One loaded copy of the chain registry.
///
/// Built once from a [`RawRegistry`]; every entry is normalized at
/// construction and the snapshot never changes afterwards. Queries are pure
/// and run in dataset order.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    raw: RawRegistry,
    chains: Vec<ChainRecord>,
}

impl ChainRegistry {
    /// Normalize a raw payload into a snapshot. Malformed entries are dropped.
    pub fn new(raw: RawRegistry) -> Self {
        let chains: Vec<ChainRecord> = raw
            .entries()
            .filter_map(|(fallback, value)| normalize_entry(value, fallback))
            .collect();

        let skipped = raw.len() - chains.len();
        if skipped > 0 {
            tracing::debug!(skipped, "dropped malformed registry entries");
        }

        Self { raw, chains }
    }

    /// The payload as decoded from upstream.
    pub fn raw(&self) -> &RawRegistry {
        &self.raw
    }

    /// All well-formed chains, in dataset order.
    pub fn chains(&self) -> &[ChainRecord] {
        &self.chains
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// First chain whose ID equals `chain_id`. Later duplicates are ignored.
    pub fn get_chain_by_id(&self, chain_id: u64) -> Option<&ChainRecord> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }

    /// Look up several chains at once, preserving request order.
    pub fn get_chains<'a>(
        &'a self,
        chain_ids: &[u64],
    ) -> Vec<(u64, Option<&'a ChainRecord>)> {
        chain_ids
            .iter()
            .map(|&id| (id, self.get_chain_by_id(id)))
            .collect()
    }

    /// Endpoint list for a chain; empty if the chain is unknown.
    pub fn get_rpc_endpoints(&self, chain_id: u64) -> Vec<String> {
        self.get_chain_by_id(chain_id)
            .map(|c| c.rpc_endpoints.clone())
            .unwrap_or_default()
    }

    /// Only the `http://` / `https://` endpoints for a chain.
    pub fn get_http_endpoints(&self, chain_id: u64) -> Vec<String> {
        self.get_chain_by_id(chain_id)
            .map(|c| http_endpoints(&c.rpc_endpoints))
            .unwrap_or_default()
    }

    /// Preferred endpoint for a chain, see [`select_best_rpc`].
    pub fn get_best_rpc(&self, chain_id: u64) -> Option<String> {
        let chain = self.get_chain_by_id(chain_id)?;
        select_best_rpc(&chain.rpc_endpoints).map(str::to_owned)
    }

    /// Search by chain ID or name.
    ///
    /// A query that parses as an integer is an exact chain-ID lookup and
    /// yields at most one record; names are not consulted. Any other query is
    /// a case-insensitive substring match on the chain name.
    pub fn search_chains(&self, query: &str) -> Vec<ChainRecord> {
        if let Ok(n) = query.trim().parse::<i128>() {
            return u64::try_from(n)
                .ok()
                .and_then(|id| self.get_chain_by_id(id))
                .into_iter()
                .cloned()
                .collect();
        }

        let needle = query.to_lowercase();
        self.chains
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Every chain ID in the registry, deduplicated and ascending.
    pub fn get_supported_chains(&self) -> Vec<u64> {
        self.chains
            .iter()
            .map(|c| c.chain_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<RawRegistry> for ChainRegistry {
    fn from(raw: RawRegistry) -> Self {
        Self::new(raw)
    }
}
