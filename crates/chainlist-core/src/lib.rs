//! chainlist-core — chain registry model, queries and caching client.
//!
//! # Overview
//!
//! Chainlist publishes a loosely-structured dataset of EVM chains and their
//! RPC endpoints. This crate turns that dataset into something typed:
//!
//! - [`RawRegistry`] — the payload as decoded (list or mapping form)
//! - [`ChainRecord`] — the canonical, normalized chain entry
//! - [`ChainRegistry`] — an immutable snapshot with lookup/search queries
//! - [`select_best_rpc`] — endpoint selection policy
//! - [`RegistrySource`] — the async trait every payload source implements
//! - [`ChainlistClient`] — lazy-fetching client with an in-memory cache
//! - [`RegistryError`] — structured error type

pub mod client;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod selection;
pub mod source;
pub mod types;

pub use client::ChainlistClient;
pub use error::RegistryError;
pub use normalize::{normalize_entry, normalize_rpc};
pub use registry::ChainRegistry;
pub use selection::{http_endpoints, select_best_rpc, EndpointScheme};
pub use source::{RegistrySource, StaticSource};
pub use types::{ChainRecord, RawRegistry, UNKNOWN_NAME};
