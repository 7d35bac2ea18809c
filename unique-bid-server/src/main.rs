//! Unique Bid Server - HTTP API for the lowest unique bid service

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unique_bid::BidService;

use unique_bid_server::{
    cli::Cli,
    config::{AppConfig, LoggingConfig},
    server::{create_app, run_server, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    let config = cli.apply(config);

    init_tracing(&config.logging);

    info!("Unique Bid Server starting...");
    info!("Configuration loaded:");
    info!("  Server: {}:{}", config.server.host, config.server.port);
    info!("  Log filter: {}", config.logging.filter);

    if config.internal_api.key.is_empty() {
        warn!("No internal API key configured, internal endpoints will reject every request");
    }

    let state = AppState::new(Arc::new(BidService::new()), &config.internal_api.key);

    // Create and run HTTP server
    let app = create_app(state);

    run_server(app, config.server.host, config.server.port)
        .await
        .context("Failed to run HTTP server")?;

    info!("Unique Bid Server shut down");

    Ok(())
}

/// Initialize tracing to stderr
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init();
    }
}
