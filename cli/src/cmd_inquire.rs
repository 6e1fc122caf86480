//! `chainlist inquire` — batch report on a set of chains.
//!
//! For each requested chain, prints the metadata and the HTTP(S) endpoints,
//! and flags chains the registry does not know. `--output` saves the result
//! as a JSON object keyed by chain ID.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use chainlist_core::{http_endpoints, ChainRecord, ChainlistClient};

/// Endpoints printed per chain before truncating.
const SHOWN_RPCS: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InquiryResult {
    chain_id: u64,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    native_currency: Option<Value>,
    #[serde(rename = "infoURL", skip_serializing_if = "Option::is_none")]
    info_url: Option<String>,
    explorers: Vec<String>,
    rpc: Vec<String>,
}

impl From<&ChainRecord> for InquiryResult {
    fn from(chain: &ChainRecord) -> Self {
        Self {
            chain_id: chain.chain_id,
            name: chain.name.clone(),
            chain: chain.chain.clone(),
            short_name: chain.short_name.clone(),
            native_currency: chain.native_currency.clone(),
            info_url: chain.info_url.clone(),
            explorers: chain.explorer_urls().into_iter().map(str::to_owned).collect(),
            rpc: http_endpoints(&chain.rpc_endpoints),
        }
    }
}

pub async fn run(
    client: &ChainlistClient,
    ids: &[u64],
    output: Option<&str>,
    json: bool,
) -> Result<()> {
    let found = client.get_chains(ids).await?;

    let mut results = Vec::new();
    let mut missing = Vec::new();
    for (id, chain) in &found {
        match chain {
            Some(chain) => results.push(InquiryResult::from(chain)),
            None => missing.push(*id),
        }
    }

    let keyed: serde_json::Map<String, Value> = results
        .iter()
        .map(|r| serde_json::to_value(r).map(|v| (r.chain_id.to_string(), v)))
        .collect::<Result<_, _>>()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "chains": keyed,
                "missing": missing,
            }))?
        );
    } else {
        for id in &missing {
            println!("[WARN] Chain {id} not found in registry");
        }
        for r in &results {
            println!("[OK] {} (chainId {}): {} HTTP RPC(s)", r.name, r.chain_id, r.rpc.len());
        }
        println!("\n--- Summary ---\n");
        for r in &results {
            print_result(r);
        }
    }

    if let Some(path) = output {
        let text = serde_json::to_string_pretty(&keyed)?;
        std::fs::write(path, text).with_context(|| format!("failed to write {path}"))?;
        eprintln!("Saved full result to {path}");
    }

    Ok(())
}

fn print_result(r: &InquiryResult) {
    let currency = |field: &str| {
        r.native_currency
            .as_ref()
            .and_then(|c| c.get(field))
            .and_then(Value::as_str)
            .unwrap_or("-")
            .to_owned()
    };

    println!("{} ({})", r.name, r.chain.as_deref().unwrap_or("-"));
    println!("  chainId: {}", r.chain_id);
    println!("  shortName: {}", r.short_name.as_deref().unwrap_or("-"));
    println!("  native: {} ({})", currency("symbol"), currency("name"));
    println!("  info: {}", r.info_url.as_deref().unwrap_or("-"));
    if !r.explorers.is_empty() {
        println!("  explorers: {}", r.explorers.join(", "));
    }
    println!("  RPC (HTTP): {}", r.rpc.len());
    for (i, url) in r.rpc.iter().take(SHOWN_RPCS).enumerate() {
        println!("    {}. {url}", i + 1);
    }
    if r.rpc.len() > SHOWN_RPCS {
        println!("    ... and {} more", r.rpc.len() - SHOWN_RPCS);
    }
    println!();
}
