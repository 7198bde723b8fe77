use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::config::ChainConfig;

/// The resolved light client configuration: the chain to follow and the block root to start
/// syncing from.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct LightClientConfig {
    #[serde(flatten)]
    pub chain: ChainConfig,
    pub checkpoint: B256,
}
