//! Ingestion step: raw chain objects → [`ChainRecord`].
//!
//! Every query consumes records produced here; nothing downstream looks at
//! raw payload shapes.

use serde_json::Value;

use crate::types::{ChainRecord, UNKNOWN_NAME};

/// Extract endpoint URLs from a raw `rpc` array.
///
/// Strings are kept as-is, objects contribute their `url` field, anything
/// else is dropped. Order and duplicates are preserved.
pub fn normalize_rpc(rpc: &Value) -> Vec<String> {
    let Some(items) = rpc.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(url) => Some(url.clone()),
            Value::Object(obj) => obj.get("url").and_then(Value::as_str).map(str::to_owned),
            _ => None,
        })
        .collect()
}

/// Normalize one raw chain object.
///
/// Returns `None` when `value` is not an object or has no non-negative
/// integral `chainId`. `fallback_name` is used when `name` is absent, not a
/// string, or empty; an empty fallback becomes [`UNKNOWN_NAME`].
pub fn normalize_entry(value: &Value, fallback_name: &str) -> Option<ChainRecord> {
    let obj = value.as_object()?;
    let chain_id = chain_id_of(obj.get("chainId")?)?;

    let fallback_name = if fallback_name.is_empty() { UNKNOWN_NAME } else { fallback_name };
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .unwrap_or(fallback_name)
        .to_owned();

    let opt_str = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_owned);

    Some(ChainRecord {
        name,
        chain_id,
        rpc_endpoints: obj.get("rpc").map(normalize_rpc).unwrap_or_default(),
        native_currency: obj.get("nativeCurrency").filter(|v| !v.is_null()).cloned(),
        explorers: obj.get("explorers").and_then(Value::as_array).cloned(),
        info_url: opt_str("infoURL"),
        short_name: opt_str("shortName"),
        chain: opt_str("chain"),
    })
}

/// Chain IDs are integers; whole-valued floats such as `42161.0` are accepted.
fn chain_id_of(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        let f = value.as_f64()?;
        (f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then_some(f as u64)
    })
}
