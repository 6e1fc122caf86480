//! Registry data model: the raw upstream payload and the canonical record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display name used for list-form entries that carry no `name`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A chain as exposed to callers, after normalization.
///
/// Field names serialize with the upstream vocabulary (`chainId`, `rpc`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub name: String,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    #[serde(rename = "rpc")]
    pub rpc_endpoints: Vec<String>,
    #[serde(rename = "nativeCurrency", default, skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorers: Option<Vec<Value>>,
    #[serde(rename = "infoURL", default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    #[serde(rename = "shortName", default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Network family tag, e.g. `"ETH"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
}

impl ChainRecord {
    /// Native currency symbol, if the upstream object carries one.
    pub fn native_symbol(&self) -> Option<&str> {
        self.native_currency.as_ref()?.get("symbol")?.as_str()
    }

    /// Explorer URLs, in upstream order.
    pub fn explorer_urls(&self) -> Vec<&str> {
        self.explorers
            .iter()
            .flatten()
            .filter_map(|e| e.get("url").and_then(Value::as_str))
            .collect()
    }
}

/// The decoded registry payload, before normalization.
///
/// Chainlist serves an ordered list of chain objects; some mirrors serve a
/// mapping from an arbitrary key to a chain object instead. Key order of the
/// mapping form is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRegistry {
    List(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl RawRegistry {
    /// Decode a payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self, crate::RegistryError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a payload from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, crate::RegistryError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode a payload from an already-parsed JSON value. Mapping-form key
    /// order follows `serde_json::Map`, not the original text.
    pub fn from_value(value: Value) -> Result<Self, crate::RegistryError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Iterate every raw entry together with the name to use when the entry
    /// has none: the mapping key, or [`UNKNOWN_NAME`] for the list form.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        match self {
            Self::List(items) => Box::new(items.iter().map(|v| (UNKNOWN_NAME, v))),
            Self::Mapping(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), v))),
        }
    }

    /// Number of raw entries, well-formed or not.
    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
