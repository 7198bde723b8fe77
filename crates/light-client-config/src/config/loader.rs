//! Reads the fork schedule out of a consensus-layer `config.yaml`.
//!
//! Every fork is declared by a `<NAME>_FORK_VERSION` and `<NAME>_FORK_EPOCH` pair. The genesis
//! fork only carries a version and always activates at epoch 0. Keys that do not describe a fork
//! are ignored.

use std::{collections::BTreeMap, fmt, fs, path::Path};

use alloy_primitives::FixedBytes;
use serde::{
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use tracing::debug;

use crate::{
    config::{utils::decode_hex_prefixed, Fork, ForkVersion, Forks, GENESIS_FORK_NAME},
    errors::ForkLoadError,
};

const FORK_VERSION_SUFFIX: &str = "_FORK_VERSION";
const FORK_EPOCH_SUFFIX: &str = "_FORK_EPOCH";

pub fn load_forks(path: impl AsRef<Path>) -> Result<Forks, ForkLoadError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let forks = parse_forks(&contents)?;
    debug!(
        path = %path.as_ref().display(),
        forks = forks.len(),
        "Loaded beacon chain fork schedule"
    );
    Ok(forks)
}

pub fn parse_forks(contents: &str) -> Result<Forks, ForkLoadError> {
    let config: BTreeMap<String, ConfigValue> = serde_yaml::from_str(contents)?;

    let mut versions: BTreeMap<String, ForkVersion> = BTreeMap::new();
    let mut epochs: BTreeMap<String, u64> = BTreeMap::from([(GENESIS_FORK_NAME.to_string(), 0)]);

    for (key, value) in &config {
        if let Some(name) = key.strip_suffix(FORK_VERSION_SUFFIX) {
            versions.insert(name.to_string(), parse_fork_version(name, value)?);
        } else if let Some(name) = key.strip_suffix(FORK_EPOCH_SUFFIX) {
            epochs.insert(name.to_string(), parse_fork_epoch(name, value)?);
        }
    }

    match epochs.get(GENESIS_FORK_NAME).copied() {
        Some(0) | None => {}
        Some(epoch) => return Err(ForkLoadError::NonZeroGenesisEpoch(epoch)),
    }

    let mut forks = Vec::with_capacity(epochs.len());
    for (name, epoch) in epochs {
        let Some(fork_version) = versions.remove(&name) else {
            return Err(ForkLoadError::MissingForkVersion(name));
        };
        forks.push(Fork {
            name,
            epoch,
            fork_version,
        });
    }
    if let Some(name) = versions.into_keys().next() {
        return Err(ForkLoadError::MissingForkEpoch(name));
    }

    Ok(Forks::from(forks))
}

fn parse_fork_version(name: &str, value: &ConfigValue) -> Result<ForkVersion, ForkLoadError> {
    let invalid = |reason: String| ForkLoadError::InvalidForkVersion {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };
    match value {
        ConfigValue::Str(hex_str) => {
            let bytes = decode_hex_prefixed(hex_str).map_err(|err| invalid(err.to_string()))?;
            FixedBytes::<4>::try_from(bytes.as_slice())
                .map_err(|_| invalid(format!("expected 4 bytes, got {}", bytes.len())))
        }
        // Unquoted `0x01000000` is resolved by YAML as an integer.
        ConfigValue::Unsigned(version) => u32::try_from(*version)
            .map(|version| FixedBytes::from(version.to_be_bytes()))
            .map_err(|_| invalid("does not fit in 4 bytes".to_string())),
        _ => Err(invalid("expected a hex string".to_string())),
    }
}

fn parse_fork_epoch(name: &str, value: &ConfigValue) -> Result<u64, ForkLoadError> {
    let epoch = match value {
        ConfigValue::Unsigned(epoch) => u64::try_from(*epoch).ok(),
        ConfigValue::Str(epoch) => epoch.trim().parse().ok(),
        _ => None,
    };
    epoch.ok_or_else(|| ForkLoadError::InvalidForkEpoch {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// A top level value of the config file.
///
/// Only scalars are kept. Integers are held as 128 bit values since configs carry numbers such
/// as `TERMINAL_TOTAL_DIFFICULTY` that overflow `u64`.
#[derive(Debug, Clone, PartialEq)]
enum ConfigValue {
    Unsigned(u128),
    Signed(i128),
    Float(f64),
    Bool(bool),
    Str(String),
    Null,
    Compound,
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Signed(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Null => f.write_str("null"),
            Self::Compound => f.write_str("<compound value>"),
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

struct ConfigValueVisitor;

impl<'de> Visitor<'de> for ConfigValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a beacon chain config value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(ConfigValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Signed(value.into()))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Self::Value, E> {
        Ok(ConfigValue::Signed(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Unsigned(value.into()))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(ConfigValue::Unsigned(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ConfigValue::Str(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(ConfigValue::Str(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ConfigValue::Compound)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(ConfigValue::Compound)
    }
}
