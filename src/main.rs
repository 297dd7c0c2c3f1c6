//! Order service binary: starts the stores, preloads sample data, and serves
//! the HTTP API until Ctrl-C.

use clap::Parser;
use order_service::api::{self, AppState};
use order_service::config::Config;
use order_service::runtime::{seed, setup_tracing, ServiceSystem};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    setup_tracing(&config.log_level);

    info!("Starting order service");
    let system = ServiceSystem::new(&config);

    if config.no_seed {
        info!("Skipping sample data");
    } else {
        seed(&system).await?;
    }

    let state = AppState::from_system(&system);
    api::serve(&config, state, shutdown_signal()).await?;

    // The router and its state are gone once serve returns.
    system.shutdown().await?;
    info!("Order service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
