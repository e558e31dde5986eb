//! Album catalog service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request       ┌──────────────────────────────────────────────┐
//!     ─────────────────────┼─▶ http::server (request id, trace, timeout)  │
//!                          │          │                                   │
//!                          │          ▼                                   │
//!                          │   http::handlers ──read/append──▶ AlbumStore │
//!                          │          │                                   │
//!     Client Response      │          ▼                                   │
//!     ◀────────────────────┼── http::response (indented JSON)             │
//!                          └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use album_catalog::config::{self, CatalogConfig};
use album_catalog::http::HttpServer;
use album_catalog::lifecycle::{signals, Shutdown};
use album_catalog::observability;

#[derive(Parser, Debug)]
#[command(name = "album-catalog")]
#[command(about = "In-memory album catalog with a JSON HTTP API", long_about = None)]
struct Args {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Listen address, overrides listener.bind_address
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,

    /// Start with an empty catalog instead of the three seed albums
    #[arg(long)]
    no_seed: bool,
}

fn resolve_config(args: &Args) -> Result<CatalogConfig, config::ConfigError> {
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => CatalogConfig::default(),
    };

    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
    }
    if args.no_seed {
        config.store.seed = false;
    }

    config::validate_config(&config).map_err(config::ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    observability::logging::init_logging(&config.observability)?;

    tracing::info!("album-catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        seed = config.store.seed,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        observability::metrics::init_metrics(addr)?;
    }

    let server = HttpServer::new(config);
    let listener = server.bind().await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::trigger_on_signal(shutdown));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
