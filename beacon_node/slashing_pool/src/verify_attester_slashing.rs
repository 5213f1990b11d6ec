use crate::{EvidenceInvalid, SlashingPoolError};
use itertools::Itertools;
use std::collections::HashSet;
use types::{AttesterSlashing, IndexedAttestation, RegistryView, Validator};

/// Checks that `attester_slashing` is structurally sound and that its two
/// attestations actually conflict (double vote or surround vote, in either
/// direction).
///
/// Signatures and validator status are checked separately by the pool.
pub fn verify_attester_slashing(
    attester_slashing: &AttesterSlashing,
) -> Result<(), SlashingPoolError> {
    let attestation_1 = &attester_slashing.attestation_1;
    let attestation_2 = &attester_slashing.attestation_2;

    verify_attesting_indices(attestation_1)?;
    verify_attesting_indices(attestation_2)?;

    // Identical attestations prove nothing.
    verify!(
        attestation_1.data != attestation_2.data,
        SlashingPoolError::NotSlashable
    );
    verify!(
        attestation_1.is_double_vote(attestation_2)
            || attestation_1.is_surround_vote(attestation_2)
            || attestation_2.is_surround_vote(attestation_1),
        SlashingPoolError::NotSlashable
    );

    Ok(())
}

/// The attesting indices list validator registry indices and must be sorted
/// ascending without duplicates.
fn verify_attesting_indices(attestation: &IndexedAttestation) -> Result<(), SlashingPoolError> {
    verify!(
        !attestation.attesting_indices.is_empty(),
        SlashingPoolError::MalformedEvidence(EvidenceInvalid::EmptyAttestingIndices)
    );

    let windows = attestation.attesting_indices.iter().tuple_windows();
    for (i, (first, second)) in windows.enumerate() {
        verify!(
            first < second,
            SlashingPoolError::MalformedEvidence(EvidenceInvalid::BadValidatorIndicesOrdering(i))
        );
    }

    Ok(())
}

/// Returns the subset of the two attestations' common validator indices for
/// which `is_slashable` holds, in ascending order.
///
/// Returns `NotSlashable` if no index survives: evidence that cannot punish
/// anyone wastes block space.
pub fn get_slashable_indices_modular<S, F>(
    state: &S,
    attester_slashing: &AttesterSlashing,
    is_slashable: F,
) -> Result<Vec<u64>, SlashingPoolError>
where
    S: RegistryView,
    F: Fn(u64, &Validator) -> bool,
{
    let attesting_indices_1 = &attester_slashing.attestation_1.attesting_indices;
    let attesting_indices_2 = attester_slashing
        .attestation_2
        .attesting_indices
        .iter()
        .copied()
        .collect::<HashSet<u64>>();

    let mut slashable_indices = vec![];
    // `attesting_indices_1` is sorted, so the intersection comes out sorted too.
    for &index in attesting_indices_1 {
        if attesting_indices_2.contains(&index) {
            let validator = state
                .validator(index)
                .ok_or(SlashingPoolError::UnknownValidator(index))?;

            if is_slashable(index, validator) {
                slashable_indices.push(index);
            }
        }
    }

    verify!(
        !slashable_indices.is_empty(),
        SlashingPoolError::NotSlashable
    );

    Ok(slashable_indices)
}
