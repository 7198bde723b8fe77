#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unwrap_used)]

pub mod config;
pub mod errors;
pub mod utils;

pub use crate::config::{
    client_config::ConfigSelectors,
    networks::{self, Network},
    ChainConfig, Fork, Forks, LightClientConfig,
};
pub use crate::errors::{ConfigError, ForkLoadError, GenesisParameter, HexDecodeError};
