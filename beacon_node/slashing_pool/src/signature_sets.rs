//! Builders for the `(public keys, signing root, signature)` tuples whose
//! verification the pool delegates to an external capability.

use crate::SlashingPoolError;
use types::{
    ChainSpec, Domain, Hash256, IndexedAttestation, ProposerSlashing, PublicKeyBytes,
    RegistryView, SignatureBytes, SignedBeaconBlockHeader, SignedRoot, Validator,
};

/// Verifies signatures for the pool.
///
/// The pool never inspects key or signature bytes itself; implementations
/// supply the actual cryptography. The domain is already folded into the
/// signing root.
pub trait SignatureVerifier {
    /// Returns `true` iff `signature` is `pubkey`'s signature over `signing_root`.
    fn verify(
        &self,
        pubkey: &PublicKeyBytes,
        signing_root: Hash256,
        signature: &SignatureBytes,
    ) -> bool;

    /// Returns `true` iff `signature` is the aggregate of all `pubkeys`'
    /// signatures over `signing_root`.
    fn verify_aggregate(
        &self,
        pubkeys: &[&PublicKeyBytes],
        signing_root: Hash256,
        signature: &SignatureBytes,
    ) -> bool;
}

/// A signature, a message, and the key(s) claimed to have produced it.
#[derive(Debug, Clone)]
pub struct SignatureSet<'a> {
    signature: &'a SignatureBytes,
    signed_by: Vec<&'a PublicKeyBytes>,
    message: Hash256,
}

impl<'a> SignatureSet<'a> {
    pub fn single_pubkey(
        signature: &'a SignatureBytes,
        pubkey: &'a PublicKeyBytes,
        message: Hash256,
    ) -> Self {
        Self {
            signature,
            signed_by: vec![pubkey],
            message,
        }
    }

    pub fn multiple_pubkeys(
        signature: &'a SignatureBytes,
        pubkeys: Vec<&'a PublicKeyBytes>,
        message: Hash256,
    ) -> Self {
        Self {
            signature,
            signed_by: pubkeys,
            message,
        }
    }

    pub fn verify<V: SignatureVerifier>(&self, verifier: &V) -> bool {
        match self.signed_by.as_slice() {
            [pubkey] => verifier.verify(pubkey, self.message, self.signature),
            pubkeys => verifier.verify_aggregate(pubkeys, self.message, self.signature),
        }
    }
}

/// Returns the signature sets for both headers of a proposer slashing.
pub fn proposer_slashing_signature_sets<'a, S: RegistryView>(
    proposer_slashing: &'a ProposerSlashing,
    proposer: &'a Validator,
    state: &S,
    spec: &ChainSpec,
) -> (SignatureSet<'a>, SignatureSet<'a>) {
    (
        block_header_signature_set(
            state,
            &proposer_slashing.signed_header_1,
            &proposer.pubkey,
            spec,
        ),
        block_header_signature_set(
            state,
            &proposer_slashing.signed_header_2,
            &proposer.pubkey,
            spec,
        ),
    )
}

/// Returns a signature set that is valid if the given `pubkey` signed the `header`.
fn block_header_signature_set<'a, S: RegistryView>(
    state: &S,
    signed_header: &'a SignedBeaconBlockHeader,
    pubkey: &'a PublicKeyBytes,
    spec: &ChainSpec,
) -> SignatureSet<'a> {
    let domain = spec.get_domain(
        signed_header.message.slot.epoch(spec.slots_per_epoch),
        Domain::BeaconProposer,
        state.fork(),
        state.genesis_validators_root(),
    );

    let message = signed_header.message.signing_root(domain);

    SignatureSet::single_pubkey(&signed_header.signature, pubkey, message)
}

/// Returns the aggregate signature set for the given `indexed_attestation`.
pub fn indexed_attestation_signature_set<'a, S: RegistryView>(
    state: &'a S,
    indexed_attestation: &'a IndexedAttestation,
    spec: &ChainSpec,
) -> Result<SignatureSet<'a>, SlashingPoolError> {
    let mut pubkeys = Vec::with_capacity(indexed_attestation.attesting_indices.len());
    for &validator_index in &indexed_attestation.attesting_indices {
        pubkeys.push(
            state
                .validator(validator_index)
                .map(|validator| &validator.pubkey)
                .ok_or(SlashingPoolError::UnknownValidator(validator_index))?,
        );
    }

    let domain = spec.get_domain(
        indexed_attestation.data.target.epoch,
        Domain::BeaconAttester,
        state.fork(),
        state.genesis_validators_root(),
    );

    let message = indexed_attestation.data.signing_root(domain);

    Ok(SignatureSet::multiple_pubkeys(
        &indexed_attestation.signature,
        pubkeys,
        message,
    ))
}
