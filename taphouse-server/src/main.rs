//! Taphouse Server
//!
//! A brewery order-management backend: customers place beer orders, orders
//! move through a status lifecycle, and per-order callback URLs receive
//! webhook notifications on every status change.

mod api;
mod bootstrap;
mod config;
mod server;
mod services;
mod shutdown;
mod state;

use clap::Parser;
use server::{build_router, run_server};
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use taphouse_core::events::EventBus;
use taphouse_core::processors::WebhookDispatcher;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Taphouse - brewery order management service
#[derive(Parser, Debug)]
#[command(name = "taphouse-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./taphouse-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting taphouse-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = config::load(&args.config, args.listen).map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    let listen_addr = config.server.listen;

    // Wire the event bus: construct the bus, subscribe the webhook
    // dispatcher, then hand the publisher to the order service. All
    // registration is explicit and happens here, before any request is
    // served.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut event_bus = EventBus::new(shutdown_rx);
    event_bus.subscribe(Arc::new(WebhookDispatcher::with_timeout(
        config.webhook.timeout(),
    )));

    // Create application state
    let state = AppState::new(event_bus.publisher());
    bootstrap::seed_catalog(&state.beers).await;

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;

    // Stop the bus workers and wait for them to finish
    tracing::info!("Stopping event bus workers...");
    let _ = shutdown_tx.send(true);
    event_bus.shutdown().await;
    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
