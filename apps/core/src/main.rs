// Sentiment Aura Backend Entry Point
// Scores transcript snippets for the aura visualizer

mod aura;
mod config;
mod error;
mod models;
mod server;
mod telemetry;

#[cfg(test)]
mod tests;

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use aura::{AuraAnalyzer, SeededJitter};
use config::ServerConfig;
use server::AppState;

fn build_analyzer(config: &ServerConfig) -> AuraAnalyzer {
    match config.jitter_seed {
        Some(seed) => {
            info!("Energy jitter seeded with {}", seed);
            AuraAnalyzer::with_jitter(Arc::new(SeededJitter::new(seed)))
        }
        None => AuraAnalyzer::new(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment still applies
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log_format).context("Failed to initialize logging")?;

    info!(
        addr = %config.addr(),
        allowed_origin = %config.allowed_origin,
        log_format = %config.log_format,
        "Starting Sentiment Aura Backend"
    );

    let state = AppState::new(build_analyzer(&config));
    let app = server::router(state, &config.allowed_origin)?;

    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.addr()))?;

    server::serve(listener, app, server::shutdown_signal()).await?;
    Ok(())
}
