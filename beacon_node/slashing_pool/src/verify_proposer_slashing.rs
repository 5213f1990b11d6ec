use crate::signature_sets::{proposer_slashing_signature_sets, SignatureVerifier};
use crate::{EvidenceInvalid, SlashingPoolError};
use types::{ChainSpec, ProposerSlashing, RegistryView, Validator};

/// Checks that the two signed headers prove a double proposal: same slot,
/// same proposer, different contents.
///
/// Registry status and signatures are checked separately so the pool can
/// interleave its duplicate check between them.
pub fn verify_header_conflict(
    proposer_slashing: &ProposerSlashing,
) -> Result<(), SlashingPoolError> {
    let header_1 = &proposer_slashing.signed_header_1.message;
    let header_2 = &proposer_slashing.signed_header_2.message;

    // Verify slots match
    verify!(
        header_1.slot == header_2.slot,
        SlashingPoolError::MalformedEvidence(EvidenceInvalid::ProposalSlotMismatch(
            header_1.slot,
            header_2.slot
        ))
    );

    // Verify header proposer indices match
    verify!(
        header_1.proposer_index == header_2.proposer_index,
        SlashingPoolError::MalformedEvidence(EvidenceInvalid::ProposerIndexMismatch(
            header_1.proposer_index,
            header_2.proposer_index
        ))
    );

    // But the headers are different
    verify!(
        header_1 != header_2,
        SlashingPoolError::MalformedEvidence(EvidenceInvalid::ProposalsIdentical)
    );

    Ok(())
}

/// Verifies both header signatures for the proposer's key under the
/// block-proposal domain of each header's epoch.
pub fn verify_proposer_slashing_signatures<S, V>(
    proposer_slashing: &ProposerSlashing,
    proposer: &Validator,
    state: &S,
    verifier: &V,
    spec: &ChainSpec,
) -> Result<(), SlashingPoolError>
where
    S: RegistryView,
    V: SignatureVerifier,
{
    let (signature_set_1, signature_set_2) =
        proposer_slashing_signature_sets(proposer_slashing, proposer, state, spec);

    verify!(
        signature_set_1.verify(verifier),
        SlashingPoolError::InvalidSignature
    );
    verify!(
        signature_set_2.verify(verifier),
        SlashingPoolError::InvalidSignature
    );

    Ok(())
}
