use smallvec::SmallVec;
use std::collections::HashSet;
use types::AttesterSlashing;

/// Number of validator indices to store on the stack in `intersecting_indices`.
pub const SMALL_VEC_SIZE: usize = 8;

/// An attester slashing retained by the pool, together with the validator
/// indices it would newly slash as of validation time.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAttesterSlashing {
    pub slashing: AttesterSlashing,
    /// Ascending; cached from the state snapshot the evidence was validated
    /// against, so it can go stale while the entry is pending.
    pub slashable_indices: Vec<u64>,
}

/// The validator indices attested by both halves of `slashing`.
///
/// This is the raw intersection: validator status is deliberately not
/// consulted, so it also covers evidence first seen inside an accepted block
/// whose subjects this node never validated.
pub fn intersecting_indices(slashing: &AttesterSlashing) -> SmallVec<[u64; SMALL_VEC_SIZE]> {
    let attestation_1_indices = slashing
        .attestation_1
        .attesting_indices
        .iter()
        .copied()
        .collect::<HashSet<u64>>();
    let attestation_2_indices = slashing
        .attestation_2
        .attesting_indices
        .iter()
        .copied()
        .collect::<HashSet<u64>>();
    attestation_1_indices
        .intersection(&attestation_2_indices)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{AttestationData, IndexedAttestation, SignatureBytes};

    fn attestation(indices: &[u64]) -> IndexedAttestation {
        IndexedAttestation {
            attesting_indices: indices.to_vec(),
            data: AttestationData::default(),
            signature: SignatureBytes::empty(),
        }
    }

    #[test]
    fn intersection_ignores_non_overlapping_indices() {
        let slashing = AttesterSlashing {
            attestation_1: attestation(&[1, 2, 3]),
            attestation_2: attestation(&[2, 3, 4]),
        };

        let mut indices = intersecting_indices(&slashing).to_vec();
        indices.sort_unstable();
        assert_eq!(indices, vec![2, 3]);
    }
}
