//! chainlist CLI — look up chains and pick RPC endpoints from the terminal.
//!
//! # Commands
//! ```text
//! chainlist fetch
//! chainlist chain     --id <chain-id>
//! chainlist rpcs      --id <chain-id> [--http-only]
//! chainlist best-rpc  --id <chain-id>
//! chainlist search    <query>
//! chainlist supported
//! chainlist inquire   --id <chain-id>... [--output <file.json>]
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chainlist_core::{ChainRecord, ChainlistClient, RawRegistry};
use chainlist_http::HttpSourceConfig;

mod cmd_inquire;
mod logging;

#[derive(Parser)]
#[command(
    name = "chainlist",
    about = "Chain registry lookups and RPC endpoint selection",
    long_about = "
Chainlist CLI: query the Chainlist chain registry and pick RPC endpoints.

ENVIRONMENT VARIABLES:
  CHAINLIST_URL            Registry URL (default: https://chainlist.org/rpcs.json)
  CHAINLIST_TIMEOUT_SECS   Request timeout in seconds (default: 30)
  CHAINLIST_LOG_JSON       Emit JSON-structured logs when set
  RUST_LOG                 Log filter, e.g. chainlist_core=debug
",
    version
)]
struct Cli {
    /// Registry URL (overrides CHAINLIST_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (overrides CHAINLIST_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the registry and report its size
    Fetch,

    /// Show one chain
    Chain {
        /// EVM chain ID
        #[arg(long)]
        id: u64,
    },

    /// List RPC endpoints for a chain
    Rpcs {
        /// EVM chain ID
        #[arg(long)]
        id: u64,
        /// Only http:// and https:// endpoints
        #[arg(long)]
        http_only: bool,
    },

    /// Print the preferred RPC endpoint for a chain
    #[command(name = "best-rpc")]
    BestRpc {
        /// EVM chain ID
        #[arg(long)]
        id: u64,
    },

    /// Search chains by ID or name
    Search {
        /// A chain ID, or part of a chain name (case-insensitive)
        query: String,
    },

    /// List every chain ID in the registry
    Supported,

    /// Report several chains at once
    Inquire {
        /// Chain IDs to report on
        #[arg(long = "id", num_args = 1.., required = true)]
        ids: Vec<u64>,
        /// Write the full result as JSON keyed by chain ID
        #[arg(long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&logging::LogConfig::from_env(cli.verbose));

    let client = build_client(cli.url, cli.timeout)?;
    let json = cli.json;

    match cli.command {
        Commands::Fetch => cmd_fetch(&client, json).await,
        Commands::Chain { id } => cmd_chain(&client, id, json).await,
        Commands::Rpcs { id, http_only } => cmd_rpcs(&client, id, http_only, json).await,
        Commands::BestRpc { id } => cmd_best_rpc(&client, id, json).await,
        Commands::Search { query } => cmd_search(&client, &query, json).await,
        Commands::Supported => cmd_supported(&client, json).await,
        Commands::Inquire { ids, output } => {
            cmd_inquire::run(&client, &ids, output.as_deref(), json).await
        }
    }
}

fn build_client(url: Option<String>, timeout: Option<u64>) -> Result<ChainlistClient> {
    let mut config = HttpSourceConfig::from_env().context("invalid environment")?;
    if let Some(url) = url {
        config = config.with_url(url);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!(
        url = %config.url,
        timeout_secs = config.request_timeout.as_secs(),
        "registry source configured"
    );
    chainlist_http::client(config).context("failed to build registry client")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_fetch(client: &ChainlistClient, json: bool) -> Result<()> {
    let registry = client
        .fetch_all_chains()
        .await
        .with_context(|| format!("failed to fetch {}", client.source_url()))?;

    let form = match registry.raw() {
        RawRegistry::List(_) => "list",
        RawRegistry::Mapping(_) => "mapping",
    };

    if json {
        return print_json(&serde_json::json!({
            "url": client.source_url(),
            "form": form,
            "entries": registry.raw().len(),
            "chains": registry.len(),
        }));
    }

    println!("Fetched {}", client.source_url());
    println!("  Form:     {form}");
    println!("  Entries:  {}", registry.raw().len());
    println!("  Chains:   {}", registry.len());
    Ok(())
}

async fn cmd_chain(client: &ChainlistClient, id: u64, json: bool) -> Result<()> {
    let chain = client.get_chain_by_id(id).await?;
    if json {
        return print_json(&chain);
    }
    match chain {
        Some(chain) => print_chain(&chain),
        None => println!("Chain {id} not found"),
    }
    Ok(())
}

async fn cmd_rpcs(client: &ChainlistClient, id: u64, http_only: bool, json: bool) -> Result<()> {
    let endpoints = if http_only {
        client.get_http_endpoints(id).await?
    } else {
        client.get_rpc_endpoints(id).await?
    };

    if json {
        return print_json(&endpoints);
    }
    if endpoints.is_empty() {
        println!("No RPC endpoints for chain {id}");
    }
    for (i, url) in endpoints.iter().enumerate() {
        let scheme = chainlist_core::EndpointScheme::of(url);
        println!("{:>4}. [{scheme:>5}] {url}", i + 1);
    }
    Ok(())
}

async fn cmd_best_rpc(client: &ChainlistClient, id: u64, json: bool) -> Result<()> {
    let best = client.get_best_rpc(id).await?;
    if json {
        return print_json(&best);
    }
    match best {
        Some(url) => println!("{url}"),
        None => println!("No RPC endpoint for chain {id}"),
    }
    Ok(())
}

async fn cmd_search(client: &ChainlistClient, query: &str, json: bool) -> Result<()> {
    let hits = client.search_chains(query).await?;
    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No chains match '{query}'");
    }
    for chain in &hits {
        println!(
            "  {:>10}  {:<40} {} RPC(s)",
            chain.chain_id,
            chain.name,
            chain.rpc_endpoints.len()
        );
    }
    Ok(())
}

async fn cmd_supported(client: &ChainlistClient, json: bool) -> Result<()> {
    let ids = client.get_supported_chains().await?;
    if json {
        return print_json(&ids);
    }
    for id in &ids {
        println!("{id}");
    }
    eprintln!("{} chains", ids.len());
    Ok(())
}

fn print_chain(chain: &ChainRecord) {
    println!("{} (chainId {})", chain.name, chain.chain_id);
    println!("  chain:      {}", chain.chain.as_deref().unwrap_or("-"));
    println!("  shortName:  {}", chain.short_name.as_deref().unwrap_or("-"));
    println!("  native:     {}", chain.native_symbol().unwrap_or("-"));
    println!("  info:       {}", chain.info_url.as_deref().unwrap_or("-"));
    let explorers = chain.explorer_urls();
    if !explorers.is_empty() {
        println!("  explorers:  {}", explorers.join(", "));
    }
    println!("  RPC:        {}", chain.rpc_endpoints.len());
}
