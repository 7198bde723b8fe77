use std::path::Path;

use alloy_primitives::{FixedBytes, B256};
use serde::{Deserialize, Serialize};

use crate::{config::loader, errors::ForkLoadError, utils::compute_fork_digest};

pub const SLOTS_PER_EPOCH: u64 = 32;

pub type ForkVersion = FixedBytes<4>;

pub const GENESIS_FORK_NAME: &str = "GENESIS";

/// A named protocol upgrade activating at `epoch`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Fork {
    pub name: String,
    pub epoch: u64,
    pub fork_version: ForkVersion,
}

impl Fork {
    pub fn is_genesis(&self) -> bool {
        self.name == GENESIS_FORK_NAME
    }
}

/// Fork schedule, ordered by activation epoch.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Forks(Vec<Fork>);

impl Forks {
    pub fn iter(&self) -> impl Iterator<Item = &Fork> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Fork> {
        self.0.iter().find(|fork| fork.name == name)
    }

    pub fn genesis(&self) -> Option<&Fork> {
        self.0.first()
    }

    /// Returns the fork active at `epoch`, i.e. the last one scheduled at or before it.
    pub fn at_epoch(&self, epoch: u64) -> Option<&Fork> {
        self.0.iter().rev().find(|fork| fork.epoch <= epoch)
    }

    fn push(&mut self, fork: Fork) {
        self.0.push(fork);
    }
}

/// Sorts by epoch, then name. The genesis fork stays first even when later forks share its
/// epoch, so those forks are the ones active from epoch 0.
impl From<Vec<Fork>> for Forks {
    fn from(mut forks: Vec<Fork>) -> Self {
        forks.sort_by(|a, b| {
            a.epoch
                .cmp(&b.epoch)
                .then_with(|| b.is_genesis().cmp(&a.is_genesis()))
                .then_with(|| a.name.cmp(&b.name))
        });
        Self(forks)
    }
}

impl<'a> IntoIterator for &'a Forks {
    type Item = &'a Fork;
    type IntoIter = std::slice::Iter<'a, Fork>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Genesis parameters and fork schedule of a beacon chain network.
///
/// Built once through [`ChainConfig::new`] and chained [`ChainConfig::add_fork`] calls, then
/// only read.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub genesis_root: B256,
    pub genesis_time: u64,
    pub forks: Forks,
}

impl ChainConfig {
    pub fn new(genesis_root: B256, genesis_time: u64) -> Self {
        Self {
            genesis_root,
            genesis_time,
            forks: Forks::default(),
        }
    }

    /// Appends a fork to the schedule. Forks must be added in activation order.
    pub fn add_fork(mut self, name: &str, epoch: u64, fork_version: ForkVersion) -> Self {
        self.forks.push(Fork {
            name: name.to_string(),
            epoch,
            fork_version,
        });
        self
    }

    /// Replaces the fork schedule with the one declared in a beacon chain config file.
    pub fn with_forks_from_file(mut self, path: impl AsRef<Path>) -> Result<Self, ForkLoadError> {
        self.forks = loader::load_forks(path)?;
        Ok(self)
    }

    pub fn fork_at_epoch(&self, epoch: u64) -> Option<&Fork> {
        self.forks.at_epoch(epoch)
    }

    pub fn fork_version(&self, slot: u64) -> Option<ForkVersion> {
        self.fork_at_epoch(slot / SLOTS_PER_EPOCH)
            .map(|fork| fork.fork_version)
    }

    pub fn fork_digest(&self, epoch: u64) -> Option<[u8; 4]> {
        self.fork_at_epoch(epoch)
            .map(|fork| compute_fork_digest(fork.fork_version, self.genesis_root))
    }
}
