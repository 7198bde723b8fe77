#![warn(clippy::unwrap_used)]

mod cli;

use std::process::exit;

use anyhow::Result;
use blsync_utils::log::init_tracing_logger;
use cli::BlsyncConfig;
use light_client_config::ConfigSelectors;
use tracing::{debug, error, info};

fn main() -> Result<()> {
    init_tracing_logger();
    let blsync_config = BlsyncConfig::from_cli();
    debug!(config = %blsync_config, "Parsed command line");

    let config = match ConfigSelectors::from(&blsync_config).resolve() {
        Ok(config) => config,
        Err(err) => {
            error!(err = %err, "Invalid beacon light client configuration");
            exit(1);
        }
    };

    info!(
        genesis_root = %config.chain.genesis_root,
        genesis_time = config.chain.genesis_time,
        forks = config.chain.forks.len(),
        checkpoint = %config.checkpoint,
        "Resolved beacon light client configuration"
    );
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
