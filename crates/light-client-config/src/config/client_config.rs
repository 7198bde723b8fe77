use std::path::{Path, PathBuf};

use alloy_primitives::B256;
use tracing::{info, warn};

use crate::{
    config::{
        utils::{decode_root, override_root},
        ChainConfig, LightClientConfig,
    },
    errors::{ConfigError, GenesisParameter},
    networks::Network,
};

pub const CUSTOM_CONFIG_FLAG: &str = "beacon.config";
pub const GENESIS_ROOT_FLAG: &str = "beacon.genesis.gvroot";
pub const CHECKPOINT_FLAG: &str = "beacon.checkpoint";

/// The user supplied values that select and override a light client configuration.
///
/// Network selectors are tri-state: `None` when the flag was not given at all, otherwise the
/// value it was given. A selector set to `false` still counts as set when checking that at most
/// one source was chosen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigSelectors {
    pub mainnet: Option<bool>,
    pub goerli: Option<bool>,
    pub sepolia: Option<bool>,
    pub custom_config: Option<PathBuf>,
    pub genesis_root: Option<String>,
    pub genesis_time: Option<u64>,
    pub checkpoint: Option<String>,
}

impl ConfigSelectors {
    /// Resolves the selectors into a single light client configuration.
    pub fn resolve(&self) -> Result<LightClientConfig, ConfigError> {
        self.check_exclusive()?;

        let mut config = match &self.custom_config {
            Some(path) => self.custom_light_client_config(path)?,
            None => {
                if self.genesis_root.is_some() {
                    return Err(ConfigError::OrphanedGenesisOverride(GenesisParameter::Root));
                }
                if self.genesis_time.is_some() {
                    return Err(ConfigError::OrphanedGenesisOverride(GenesisParameter::Time));
                }
                let network = self.selected_network();
                info!(%network, "Using predefined beacon chain config");
                network.light_client_config().clone()
            }
        };

        // Only the leading bytes are replaced when a shorter checkpoint is given.
        if let Some(checkpoint) = &self.checkpoint {
            override_root(CHECKPOINT_FLAG, checkpoint, &mut config.checkpoint)?;
        }

        if self.custom_config.is_some() && config.checkpoint == B256::ZERO {
            warn!("Custom beacon chain config is used without a checkpoint");
        }

        Ok(config)
    }

    fn check_exclusive(&self) -> Result<(), ConfigError> {
        let selectors: Vec<&'static str> = [
            (self.mainnet.is_some(), Network::Mainnet.flag()),
            (self.goerli.is_some(), Network::Goerli.flag()),
            (self.sepolia.is_some(), Network::Sepolia.flag()),
            (self.custom_config.is_some(), CUSTOM_CONFIG_FLAG),
        ]
        .into_iter()
        .filter_map(|(is_set, flag)| is_set.then_some(flag))
        .collect();

        if selectors.len() > 1 {
            return Err(ConfigError::ConflictingSelectors { selectors });
        }
        Ok(())
    }

    fn selected_network(&self) -> Network {
        if self.mainnet == Some(true) {
            Network::Mainnet
        } else if self.goerli == Some(true) {
            Network::Goerli
        } else if self.sepolia == Some(true) {
            Network::Sepolia
        } else {
            Network::Mainnet
        }
    }

    fn custom_light_client_config(&self, path: &Path) -> Result<LightClientConfig, ConfigError> {
        let Some(genesis_root) = &self.genesis_root else {
            return Err(ConfigError::MissingGenesisParameter(GenesisParameter::Root));
        };
        let Some(genesis_time) = self.genesis_time else {
            return Err(ConfigError::MissingGenesisParameter(GenesisParameter::Time));
        };

        let genesis_root = decode_root(GENESIS_ROOT_FLAG, genesis_root)?;
        let chain = ChainConfig::new(genesis_root, genesis_time)
            .with_forks_from_file(path)
            .map_err(|source| ConfigError::ForkScheduleLoadError {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            %genesis_root,
            genesis_time,
            forks = chain.forks.len(),
            "Using custom beacon chain config"
        );
        Ok(LightClientConfig {
            chain,
            checkpoint: B256::ZERO,
        })
    }
}
