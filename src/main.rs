// =============================================================================
// Helios Market Analyst — Main Entry Point
// =============================================================================
//
// Thin bootstrap around a stateless analysis core: load environment config,
// initialise tracing, wire the market-data client into the router and serve.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod api;
mod app_state;
mod config;
mod engine;
mod error;
mod indicators;
mod market_data;
mod report;
mod series;
mod signals;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::Config;
use crate::market_data::YahooClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!(bind = %config.bind_addr(), "Helios Market Analyst starting");

    // ── 2. Services & router ─────────────────────────────────────────────
    let state = Arc::new(AppState::new(YahooClient::new(), config.clone()));
    let app = api::router(state);

    // ── 3. Serve ─────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
