use std::{fmt, path::PathBuf};

use thiserror::Error;

/// The genesis values that may only be supplied together with a custom chain config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisParameter {
    Root,
    Time,
}

impl GenesisParameter {
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Root => "beacon.genesis.gvroot",
            Self::Time => "beacon.genesis.time",
        }
    }
}

impl fmt::Display for GenesisParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "genesis root (--{})", self.flag()),
            Self::Time => write!(f, "genesis time (--{})", self.flag()),
        }
    }
}

/// Errors that can occur while resolving the light client configuration.
///
/// All of them are fatal at startup: a client must not sync from a configuration it could not
/// fully resolve.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("only one of {} may be set", .selectors.join(", "))]
    ConflictingSelectors { selectors: Vec<&'static str> },

    #[error("custom beacon chain config is specified but {0} is missing")]
    MissingGenesisParameter(GenesisParameter),

    #[error("{0} is specified but custom beacon chain config is missing")]
    OrphanedGenesisOverride(GenesisParameter),

    #[error("invalid hex string for {field}: {value:?}: {source}")]
    InvalidHexEncoding {
        field: &'static str,
        value: String,
        #[source]
        source: HexDecodeError,
    },

    #[error("could not load beacon chain config file {}: {source}", .path.display())]
    ForkScheduleLoadError {
        path: PathBuf,
        #[source]
        source: ForkLoadError,
    },
}

#[derive(Debug, Error)]
pub enum HexDecodeError {
    #[error("empty hex string")]
    Empty,

    #[error("hex string without 0x prefix")]
    MissingPrefix,

    #[error(transparent)]
    Invalid(#[from] hex::FromHexError),

    #[error("decoded value is {len} bytes long, at most {max} allowed")]
    TooLong { len: usize, max: usize },
}

/// Errors raised while reading a fork schedule out of a beacon chain config file.
#[derive(Debug, Error)]
pub enum ForkLoadError {
    #[error("failed to read beacon chain config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse beacon chain config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to decode fork version {value:?} for {name}: {reason}")]
    InvalidForkVersion {
        name: String,
        value: String,
        reason: String,
    },

    #[error("failed to parse epoch number {value:?} for {name}")]
    InvalidForkEpoch { name: String, value: String },

    #[error("fork version missing for {0:?} in beacon chain config file")]
    MissingForkVersion(String),

    #[error("epoch number missing for fork {0:?} in beacon chain config file")]
    MissingForkEpoch(String),

    #[error("genesis fork must activate at epoch 0, found {0}")]
    NonZeroGenesisEpoch(u64),
}
