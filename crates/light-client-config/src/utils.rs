use alloy_primitives::{FixedBytes, B256};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

#[derive(Default, Debug, TreeHash)]
struct ForkData {
    current_version: FixedBytes<4>,
    genesis_validator_root: B256,
}

pub fn compute_fork_data_root(
    current_version: FixedBytes<4>,
    genesis_validator_root: B256,
) -> B256 {
    let fork_data = ForkData {
        current_version,
        genesis_validator_root,
    };
    fork_data.tree_hash_root()
}

/// The fork digest is the first four bytes of the fork data root.
pub fn compute_fork_digest(
    current_version: FixedBytes<4>,
    genesis_validator_root: B256,
) -> [u8; 4] {
    let root = compute_fork_data_root(current_version, genesis_validator_root);
    let mut digest = [0u8; 4];
    digest.copy_from_slice(&root[..4]);
    digest
}
