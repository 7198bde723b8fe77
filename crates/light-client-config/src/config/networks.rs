use std::sync::LazyLock;

use alloy_primitives::{b256, fixed_bytes};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::{ChainConfig, LightClientConfig};

pub static MAINNET: LazyLock<LightClientConfig> = LazyLock::new(mainnet);
pub static GOERLI: LazyLock<LightClientConfig> = LazyLock::new(goerli);
pub static SEPOLIA: LazyLock<LightClientConfig> = LazyLock::new(sepolia);

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    Hash,
    Eq,
    PartialEq,
    PartialOrd,
    Ord,
)]
pub enum Network {
    Mainnet,
    Goerli,
    Sepolia,
}

impl Network {
    pub fn light_client_config(self) -> &'static LightClientConfig {
        match self {
            Self::Mainnet => &MAINNET,
            Self::Goerli => &GOERLI,
            Self::Sepolia => &SEPOLIA,
        }
    }

    /// Name of the command line flag selecting this network.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Goerli => "goerli",
            Self::Sepolia => "sepolia",
        }
    }
}

pub fn mainnet() -> LightClientConfig {
    LightClientConfig {
        chain: ChainConfig::new(
            b256!("0xe7928a5608c8748de824906249149e1279fd118a1b05970caff2594770c6c772"),
            1724336895,
        )
        .add_fork("GENESIS", 0, fixed_bytes!("0x00000000"))
        .add_fork("ALTAIR", 74240, fixed_bytes!("0x01000000"))
        .add_fork("BELLATRIX", 144896, fixed_bytes!("0x02000000"))
        .add_fork("CAPELLA", 194048, fixed_bytes!("0x03000000"))
        .add_fork("DENEB", 269568, fixed_bytes!("0x04000000")),
        checkpoint: b256!("0xe7928a5608c8748de824906249149e1279fd118a1b05970caff2594770c6c772"),
    }
}

pub fn goerli() -> LightClientConfig {
    LightClientConfig {
        chain: ChainConfig::new(
            b256!("0x043db0d9a83813551ee2f33450d23797757d430911a9320530ad8a0eabc43efb"),
            1614588812,
        )
        .add_fork("GENESIS", 0, fixed_bytes!("0x00001020"))
        .add_fork("ALTAIR", 36660, fixed_bytes!("0x01001020"))
        .add_fork("BELLATRIX", 112260, fixed_bytes!("0x02001020"))
        .add_fork("CAPELLA", 162304, fixed_bytes!("0x03001020"))
        .add_fork("DENEB", 231680, fixed_bytes!("0x04001020")),
        checkpoint: b256!("0x53a0f4f0a378e2c4ae0a9ee97407eb69d0d737d8d8cd0a5fb1093f42f7b81c49"),
    }
}

pub fn sepolia() -> LightClientConfig {
    LightClientConfig {
        chain: ChainConfig::new(
            b256!("0xd8ea171f3c94aea21ebc42a1ed61052acf3f9209c00e4efbaaddac09ed9b8078"),
            1655733600,
        )
        .add_fork("GENESIS", 0, fixed_bytes!("0x90000069"))
        .add_fork("ALTAIR", 50, fixed_bytes!("0x90000070"))
        .add_fork("BELLATRIX", 100, fixed_bytes!("0x90000071"))
        .add_fork("CAPELLA", 56832, fixed_bytes!("0x90000072"))
        .add_fork("DENEB", 132608, fixed_bytes!("0x90000073"))
        .add_fork("ELECTRA", 222464, fixed_bytes!("0x90000074")),
        checkpoint: b256!("0x234931a3fe5d791f06092477357e2d65dcf6fa6cad048680eb93ad3ea494bbcd"),
    }
}
