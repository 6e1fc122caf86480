//! Tracing / logging initialisation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set to any value to emit JSON-structured logs.
pub const ENV_LOG_JSON: &str = "CHAINLIST_LOG_JSON";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default directive when `RUST_LOG` is unset: "warn", "debug", ...
    pub level: String,
    pub json: bool,
}

impl LogConfig {
    pub fn from_env(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "warn" }.into(),
            json: std::env::var_os(ENV_LOG_JSON).is_some(),
        }
    }
}

/// Initialise tracing to stderr. Call once at startup.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer().with_writer(std::io::stderr);
    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init();
    }
}
