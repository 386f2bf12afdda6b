//! Item Version Check API server.

use anyhow::{Context, Result};
use clap::Parser;
use item_version_api_rest::app::{build_catalog, create_app};
use item_version_common::{init_tracing, AppConfig};
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "item-version-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "ITEM_VERSION_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "ITEM_VERSION_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "ITEM_VERSION_PORT")]
    port: Option<u16>,

    /// Product catalog seed file (JSON or TOML)
    #[arg(long, env = "ITEM_VERSION_CATALOG")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_with(args.config.as_deref())?;

    // Override with CLI arguments
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog.seed_file = Some(catalog);
    }
    config.validate()?;

    init_tracing(&config.telemetry)?;

    info!(
        service = %config.telemetry.service_name,
        endpoint = %config.endpoint.path,
        "Starting item version check API"
    );

    let catalog = build_catalog(&config.catalog)?;

    let address = config.server_address();
    let app = create_app(config, catalog);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down gracefully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
