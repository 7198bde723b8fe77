use std::{env, ffi::OsString, fmt, path::PathBuf};

use blsync_utils::version::{APP_NAME, BLSYNC_VERSION};
use clap::Parser;
use light_client_config::ConfigSelectors;

#[derive(Parser, Debug, Default, PartialEq, Clone)]
#[command(name = APP_NAME,
    about = "Resolve the beacon chain light client configuration",
    version = BLSYNC_VERSION
)]
pub struct BlsyncConfig {
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Use the Ethereum mainnet beacon chain (default when no network is selected)"
    )]
    pub mainnet: Option<bool>,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Use the Goerli beacon chain"
    )]
    pub goerli: Option<bool>,

    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Use the Sepolia beacon chain"
    )]
    pub sepolia: Option<bool>,

    #[arg(
        id = "beacon.config",
        long = "beacon.config",
        help = "Beacon chain config YAML file declaring a custom fork schedule. Requires --beacon.genesis.gvroot and --beacon.genesis.time"
    )]
    pub beacon_config: Option<PathBuf>,

    #[arg(
        id = "beacon.genesis.gvroot",
        long = "beacon.genesis.gvroot",
        help = "Hex encoded genesis validators root of a custom beacon chain"
    )]
    pub genesis_root: Option<String>,

    #[arg(
        id = "beacon.genesis.time",
        long = "beacon.genesis.time",
        help = "Genesis time (unix seconds) of a custom beacon chain"
    )]
    pub genesis_time: Option<u64>,

    #[arg(
        id = "beacon.checkpoint",
        long = "beacon.checkpoint",
        help = "Hex encoded block root of a trusted checkpoint to start syncing from"
    )]
    pub checkpoint: Option<String>,
}

impl BlsyncConfig {
    pub fn from_cli() -> Self {
        Self::new_from(env::args_os()).unwrap_or_else(|e| e.exit())
    }

    pub fn new_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

impl fmt::Display for BlsyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlsyncConfig")
            .field("mainnet", &self.mainnet)
            .field("goerli", &self.goerli)
            .field("sepolia", &self.sepolia)
            .field("beacon.config", &self.beacon_config)
            .field("beacon.genesis.gvroot", &self.genesis_root)
            .field("beacon.genesis.time", &self.genesis_time)
            .field("beacon.checkpoint", &self.checkpoint)
            .finish()
    }
}

impl From<&BlsyncConfig> for ConfigSelectors {
    fn from(config: &BlsyncConfig) -> Self {
        ConfigSelectors {
            mainnet: config.mainnet,
            goerli: config.goerli,
            sepolia: config.sepolia,
            custom_config: config.beacon_config.clone(),
            genesis_root: config.genesis_root.clone(),
            genesis_time: config.genesis_time,
            checkpoint: config.checkpoint.clone(),
        }
    }
}
