//! Career Mentor - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, ApiConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().context("failed to load configuration")?;
    init_logging(&config)?;

    info!("=== Career Mentor v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Artifacts: {:?}", config.artifacts);

    run_server(config).await
}
