//! Dash Server - Main entry point

use anyhow::Result;
use dash_common::logging::{init_logging, LogConfig};
use tracing::info;

use dash_server::{api, config::Config, ingest, state::DatasetHandle};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let log_config = LogConfig::from_env()?;
    init_logging(&log_config)?;

    info!("Starting Dash Server");

    // Load configuration
    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    // Initial dataset load; an unreadable source is fatal at startup
    let snapshot = ingest::load_path(&config.data.path)?;
    info!(
        loaded = snapshot.records.len(),
        invalid = snapshot.invalid.len(),
        path = %config.data.path.display(),
        "Dataset loaded"
    );

    let dataset = DatasetHandle::new(snapshot);

    api::serve(config, dataset).await?;

    info!("Server shut down gracefully");

    Ok(())
}
