use crate::{Epoch, Fork, ForkData, Hash256};
use tree_hash::TreeHash;

/// Signing domains for the message types the pool verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    BeaconProposer,
    BeaconAttester,
}

/// Protocol constants consumed by the pool. Owned by the node's configuration
/// layer, read-only here.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSpec {
    pub slots_per_epoch: u64,
    pub far_future_epoch: Epoch,
    pub genesis_fork_version: [u8; 4],

    /*
     * Per-block caps, mirrored from the block body limits.
     */
    pub max_proposer_slashings: u64,
    pub max_attester_slashings: u64,

    /*
     * Signature domains.
     */
    domain_beacon_proposer: u32,
    domain_beacon_attester: u32,
}

impl ChainSpec {
    /// Returns a `ChainSpec` compatible with the Ethereum Foundation mainnet.
    pub fn mainnet() -> Self {
        Self {
            slots_per_epoch: 32,
            far_future_epoch: Epoch::new(u64::MAX),
            genesis_fork_version: [0, 0, 0, 0],
            max_proposer_slashings: 16,
            max_attester_slashings: 2,
            domain_beacon_proposer: 0,
            domain_beacon_attester: 1,
        }
    }

    /// Get the domain number, unmodified by the fork.
    fn get_domain_constant(&self, domain: Domain) -> u32 {
        match domain {
            Domain::BeaconProposer => self.domain_beacon_proposer,
            Domain::BeaconAttester => self.domain_beacon_attester,
        }
    }

    /// Get the domain that represents the fork meta and signature domain.
    pub fn get_domain(
        &self,
        epoch: Epoch,
        domain: Domain,
        fork: &Fork,
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let fork_version = fork.get_fork_version(epoch);
        self.compute_domain(domain, fork_version, genesis_validators_root)
    }

    /// Compute a domain by applying the given `fork_version`.
    pub fn compute_domain(
        &self,
        domain: Domain,
        fork_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        let domain_constant = self.get_domain_constant(domain);

        let mut domain = [0; 32];
        domain[0..4].copy_from_slice(&domain_constant.to_le_bytes());
        domain[4..].copy_from_slice(
            Self::compute_fork_data_root(fork_version, genesis_validators_root)
                .as_bytes()
                .get(..28)
                .expect("fork has is 32 bytes so first 28 bytes should exist"),
        );

        Hash256::from(domain)
    }

    /// Return the 32-byte fork data root for the `current_version` and
    /// `genesis_validators_root`.
    ///
    /// This is used primarily in signature domains to avoid collisions across
    /// forks/chains.
    pub fn compute_fork_data_root(
        current_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Hash256 {
        ForkData {
            current_version,
            genesis_validators_root,
        }
        .tree_hash_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_are_distinct() {
        let spec = ChainSpec::mainnet();
        let root = Hash256::zero();

        let proposer = spec.compute_domain(Domain::BeaconProposer, [0; 4], root);
        let attester = spec.compute_domain(Domain::BeaconAttester, [0; 4], root);
        assert_ne!(proposer, attester);

        // The fork version is mixed in.
        let other_fork = spec.compute_domain(Domain::BeaconProposer, [1; 4], root);
        assert_ne!(proposer, other_fork);
    }

    #[test]
    fn get_domain_selects_fork_version() {
        let spec = ChainSpec::mainnet();
        let fork = Fork {
            previous_version: [0; 4],
            current_version: [1; 4],
            epoch: Epoch::new(10),
        };
        let root = Hash256::zero();

        assert_eq!(
            spec.get_domain(Epoch::new(9), Domain::BeaconProposer, &fork, root),
            spec.compute_domain(Domain::BeaconProposer, [0; 4], root)
        );
        assert_eq!(
            spec.get_domain(Epoch::new(10), Domain::BeaconProposer, &fork, root),
            spec.compute_domain(Domain::BeaconProposer, [1; 4], root)
        );
    }
}
