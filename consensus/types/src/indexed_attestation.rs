use crate::{AttestationData, SignatureBytes};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// Details an attestation that can be slashable.
///
/// To be included in an `AttesterSlashing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct IndexedAttestation {
    /// Lists validator registry indices, not committee indices.
    ///
    /// Must be sorted ascending without duplicates.
    #[serde(with = "eth2_serde_utils::quoted_u64_vec")]
    pub attesting_indices: Vec<u64>,
    pub data: AttestationData,
    /// Aggregate signature over `data` by every listed validator.
    pub signature: SignatureBytes,
}

impl IndexedAttestation {
    /// Check if ``attestation_data_1`` and ``attestation_data_2`` have the same target.
    pub fn is_double_vote(&self, other: &Self) -> bool {
        self.data.target.epoch == other.data.target.epoch && self.data != other.data
    }

    /// Check if ``attestation_data_1`` surrounds ``attestation_data_2``.
    pub fn is_surround_vote(&self, other: &Self) -> bool {
        self.data.source.epoch < other.data.source.epoch
            && other.data.target.epoch < self.data.target.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checkpoint, Epoch, Hash256};

    #[test]
    pub fn test_is_double_vote_true() {
        let indexed_vote_first = create_indexed_attestation(3, 1);
        let indexed_vote_second = create_indexed_attestation(3, 2);

        assert!(indexed_vote_first.is_double_vote(&indexed_vote_second))
    }

    #[test]
    pub fn test_is_double_vote_false() {
        let indexed_vote_first = create_indexed_attestation(1, 1);
        let indexed_vote_second = create_indexed_attestation(2, 1);

        assert!(!indexed_vote_first.is_double_vote(&indexed_vote_second));
    }

    #[test]
    pub fn test_is_surround_vote_true() {
        let indexed_vote_first = create_indexed_attestation(2, 1);
        let indexed_vote_second = create_indexed_attestation(1, 2);

        assert!(indexed_vote_first.is_surround_vote(&indexed_vote_second));
    }

    #[test]
    pub fn test_is_surround_vote_true_realistic() {
        let indexed_vote_first = create_indexed_attestation(4, 1);
        let indexed_vote_second = create_indexed_attestation(3, 2);

        assert!(indexed_vote_first.is_surround_vote(&indexed_vote_second));
    }

    #[test]
    pub fn test_is_surround_vote_false_source_epoch_fails() {
        let indexed_vote_first = create_indexed_attestation(2, 2);
        let indexed_vote_second = create_indexed_attestation(1, 1);

        assert!(!indexed_vote_first.is_surround_vote(&indexed_vote_second));
    }

    #[test]
    pub fn test_is_surround_vote_false_target_epoch_fails() {
        let indexed_vote_first = create_indexed_attestation(1, 1);
        let indexed_vote_second = create_indexed_attestation(2, 2);

        assert!(!indexed_vote_first.is_surround_vote(&indexed_vote_second));
    }

    fn create_indexed_attestation(target_epoch: u64, source_epoch: u64) -> IndexedAttestation {
        IndexedAttestation {
            attesting_indices: vec![0, 1, 2],
            data: AttestationData {
                source: Checkpoint {
                    epoch: Epoch::new(source_epoch),
                    root: Hash256::zero(),
                },
                target: Checkpoint {
                    epoch: Epoch::new(target_epoch),
                    root: Hash256::zero(),
                },
                ..AttestationData::default()
            },
            signature: SignatureBytes::empty(),
        }
    }
}
