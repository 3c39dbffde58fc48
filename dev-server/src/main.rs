//! Development server for the back-office
//!
//! Starts the in-memory api on a fixed port with a seeded dataset, so the
//! `backoffice` binary (or any other client) can be pointed at it.
//!
//! Usage: DEV_SERVER_PORT=8000 cargo run -p dev-server

use anyhow::{Context, Result};
use payloads::telemetry;
use test_helpers::mock::DevDataset;
use tracing::info;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let port = match std::env::var("DEV_SERVER_PORT") {
        Ok(port) => port.parse().context("DEV_SERVER_PORT must be a port")?,
        Err(_) => DEFAULT_PORT,
    };

    let subscriber = telemetry::get_subscriber("info");
    telemetry::init_subscriber(subscriber)?;

    let app = test_helpers::spawn_app_on_port(port).await;
    info!("API server running on {}", app.address());

    let dataset = DevDataset::create(&app).await?;
    dataset.print_summary();
    info!("Try: API_ADDRESS={} cargo run -p backoffice", app.address());

    tokio::signal::ctrl_c().await?;
    info!("Shutting down development server");
    Ok(())
}
