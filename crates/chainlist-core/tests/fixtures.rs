//! Fixture integration tests for chainlist-core.
//!
//! Each test loads a registry snapshot from `fixtures/`, serves it through a
//! `StaticSource`, and checks the client's answers against the fixture.

use std::sync::Arc;

use chainlist_core::{ChainlistClient, RawRegistry, RegistryError, StaticSource};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures");
    p.push(name);
    p
}

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture not found")
}

fn client_for(name: &str) -> ChainlistClient {
    let source = StaticSource::from_json(name, &load_fixture(name)).expect("invalid fixture JSON");
    ChainlistClient::new(Arc::new(source))
}

// ─── List form ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_fixture_skips_malformed_entries() {
    let client = client_for("chainlist-list.json");
    let registry = client.fetch_all_chains().await.unwrap();

    assert!(matches!(registry.raw(), RawRegistry::List(_)));
    assert_eq!(registry.raw().len(), 9);
    assert_eq!(registry.len(), 7);
}

#[tokio::test]
async fn list_fixture_chain_lookup() {
    let client = client_for("chainlist-list.json");
    let fuse = client.get_chain_by_id(122).await.unwrap().expect("fuse missing");

    assert_eq!(fuse.name, "Fuse Mainnet");
    assert_eq!(fuse.short_name.as_deref(), Some("fuse"));
    assert_eq!(fuse.native_symbol(), Some("FUSE"));
    assert_eq!(fuse.explorer_urls(), vec!["https://explorer.fuse.io"]);
    assert_eq!(
        fuse.rpc_endpoints,
        vec!["https://rpc.fuse.io", "https://fuse.drpc.org", "wss://fuse.drpc.org"]
    );
}

#[tokio::test]
async fn list_fixture_duplicate_chain_id_first_wins() {
    let client = client_for("chainlist-list.json");
    let arb = client.get_chain_by_id(42161).await.unwrap().unwrap();
    assert_eq!(arb.name, "Arbitrum One");
    assert_eq!(
        arb.rpc_endpoints,
        vec!["http://arb1.example.org", "https://arb1.arbitrum.io/rpc", "https://arbitrum.llamarpc.com"]
    );
}

#[tokio::test]
async fn list_fixture_best_rpc() {
    let client = client_for("chainlist-list.json");

    assert_eq!(
        client.get_best_rpc(42161).await.unwrap().as_deref(),
        Some("https://arb1.arbitrum.io/rpc")
    );
    assert_eq!(
        client.get_best_rpc(1285).await.unwrap().as_deref(),
        Some("https://rpc.api.moonriver.moonbeam.network")
    );
    // websocket-only chain falls back to its first endpoint
    assert_eq!(
        client.get_best_rpc(3338).await.unwrap().as_deref(),
        Some("wss://peaq.api.onfinality.io/public-ws")
    );
    assert_eq!(client.get_best_rpc(421610).await.unwrap(), None);
    assert_eq!(client.get_best_rpc(747474).await.unwrap(), None);
}

#[tokio::test]
async fn list_fixture_http_endpoints() {
    let client = client_for("chainlist-list.json");
    assert!(client.get_http_endpoints(3338).await.unwrap().is_empty());
    assert_eq!(
        client.get_http_endpoints(1285).await.unwrap(),
        vec!["http://moonriver.unitedbloc.com:2000", "https://rpc.api.moonriver.moonbeam.network"]
    );
}

#[tokio::test]
async fn list_fixture_search() {
    let client = client_for("chainlist-list.json");

    let by_id = client.search_chains("42161").await.unwrap();
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].name, "Arbitrum One");

    let by_name: Vec<u64> = client
        .search_chains("arbitrum")
        .await
        .unwrap()
        .iter()
        .map(|c| c.chain_id)
        .collect();
    assert_eq!(by_name, vec![42161, 42161]);

    assert!(client.search_chains("solana").await.unwrap().is_empty());
}

#[tokio::test]
async fn list_fixture_supported_chains() {
    let client = client_for("chainlist-list.json");
    assert_eq!(
        client.get_supported_chains().await.unwrap(),
        vec![1, 122, 1285, 3338, 42161, 421610]
    );
}

// ─── Mapping form ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn mapping_fixture_uses_key_as_fallback_name() {
    let client = client_for("chainlist-mapping.json");
    let registry = client.fetch_all_chains().await.unwrap();

    assert!(matches!(registry.raw(), RawRegistry::Mapping(_)));
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get_chain_by_id(42161).unwrap().name, "arb1");
    assert_eq!(registry.get_chain_by_id(1).unwrap().name, "Ethereum Mainnet");
}

#[tokio::test]
async fn mapping_fixture_queries_match_list_semantics() {
    let client = client_for("chainlist-mapping.json");

    assert_eq!(
        client.get_best_rpc(42161).await.unwrap().as_deref(),
        Some("https://arb1.arbitrum.io/rpc")
    );
    assert_eq!(client.get_supported_chains().await.unwrap(), vec![1, 42161, 747474]);

    let names: Vec<String> = client
        .search_chains("a")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["arb1", "Ethereum Mainnet", "Katana"]);
}

// ─── Invalid payloads ─────────────────────────────────────────────────────────

#[test]
fn scalar_payload_is_a_decode_error() {
    let err = StaticSource::from_json("bad", "\"rpcs\"").err().expect("should fail");
    assert!(matches!(err, RegistryError::Decode(_)));
}
