mod base;
pub mod client_config;
pub mod loader;
pub mod networks;
mod types;
pub mod utils;

pub use base::LightClientConfig;
pub use types::{ChainConfig, Fork, ForkVersion, Forks, GENESIS_FORK_NAME, SLOTS_PER_EPOCH};
