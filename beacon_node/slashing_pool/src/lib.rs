//! A pool of slashing evidence awaiting block inclusion.
//!
//! Evidence arrives from gossip or the local submission endpoint, is
//! validated against a registry snapshot, and is retained in deterministic
//! order until block import reports it included. Indices that have been the
//! subject of an included slashing are remembered forever so the same
//! validator can never be punished twice through this pool.

#[macro_use]
mod macros;

mod attester_slashing;
mod metrics;
mod signature_sets;
mod verify_attester_slashing;
mod verify_proposer_slashing;

pub use crate::attester_slashing::PendingAttesterSlashing;
pub use crate::signature_sets::{
    indexed_attestation_signature_set, proposer_slashing_signature_sets, SignatureSet,
    SignatureVerifier,
};
pub use crate::verify_attester_slashing::{get_slashable_indices_modular, verify_attester_slashing};
pub use crate::verify_proposer_slashing::{
    verify_header_conflict, verify_proposer_slashing_signatures,
};

use crate::attester_slashing::intersecting_indices;
use parking_lot::RwLock;
use std::collections::HashSet;
use types::{AttesterSlashing, ChainSpec, ProposerSlashing, RegistryView, Slot};

/// Structural defects that make evidence incapable of proving anything.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EvidenceInvalid {
    /// The two headers are for different slots.
    ProposalSlotMismatch(Slot, Slot),
    /// The two headers are signed by different proposers.
    ProposerIndexMismatch(u64, u64),
    /// The two headers are identical.
    ProposalsIdentical,
    /// An attestation lists no validators.
    EmptyAttestingIndices,
    /// The attesting indices were not sorted ascending and unique; the index
    /// is of the first offending window.
    BadValidatorIndicesOrdering(usize),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SlashingPoolError {
    /// The implicated validator index does not resolve in the registry.
    UnknownValidator(u64),
    /// The evidence is structurally unable to prove a violation.
    MalformedEvidence(EvidenceInvalid),
    /// Byte-identical evidence is already pending.
    AlreadyPending,
    /// Nobody would be punished by this evidence: every subject is already
    /// slashed, exited, or has had a slashing included in a block.
    NotSlashable,
    /// A signature check failed; the pool is left untouched.
    InvalidSignature,
}

/// A pool of unique slashing evidence, in block-inclusion order.
///
/// There is one instance per process, shared by evidence ingestion, block
/// assembly and block import. Each sub-pool has its own lock and every
/// insertion validates and mutates under that lock as one atomic unit, so a
/// call either fully succeeds or leaves the pool unchanged.
#[derive(Debug, Default)]
pub struct SlashingPool {
    /// Double-proposal evidence, sorted ascending by proposer index, unique.
    proposer_slashings: RwLock<Vec<ProposerSlashing>>,
    /// Conflicting-attestation evidence, sorted descending by the number of
    /// validators it would newly slash, insertion-ordered among ties.
    attester_slashings: RwLock<Vec<PendingAttesterSlashing>>,
    /// Validator indices whose slashing has been included in an accepted
    /// block. Write-once per index; entries are never removed.
    ///
    /// Lock ordering: only taken while already holding a sub-pool lock.
    included: RwLock<HashSet<u64>>,
}

impl SlashingPool {
    /// Create a new, empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a proposer slashing against `state` and insert it at its
    /// sorted position.
    ///
    /// The first failed check wins; a rejected candidate never perturbs
    /// pending entries.
    pub fn insert_proposer_slashing<S, V>(
        &self,
        proposer_slashing: ProposerSlashing,
        state: &S,
        verifier: &V,
        spec: &ChainSpec,
    ) -> Result<(), SlashingPoolError>
    where
        S: RegistryView,
        V: SignatureVerifier,
    {
        let result = self.insert_proposer_slashing_inner(proposer_slashing, state, verifier, spec);
        match &result {
            Ok(()) => {
                metrics::inc_counter(&metrics::PROPOSER_SLASHINGS_INSERTED);
                metrics::set_gauge(
                    &metrics::PROPOSER_SLASHINGS_IN_POOL,
                    self.num_proposer_slashings() as i64,
                );
            }
            Err(_) => metrics::inc_counter(&metrics::PROPOSER_SLASHINGS_REJECTED),
        }
        result
    }

    fn insert_proposer_slashing_inner<S, V>(
        &self,
        proposer_slashing: ProposerSlashing,
        state: &S,
        verifier: &V,
        spec: &ChainSpec,
    ) -> Result<(), SlashingPoolError>
    where
        S: RegistryView,
        V: SignatureVerifier,
    {
        let proposer_index = proposer_slashing.proposer_index();
        let mut pending = self.proposer_slashings.write();

        let proposer = state
            .validator(proposer_index)
            .ok_or(SlashingPoolError::UnknownValidator(proposer_index))?;

        verify_header_conflict(&proposer_slashing)?;

        verify!(
            !pending.iter().any(|existing| *existing == proposer_slashing),
            SlashingPoolError::AlreadyPending
        );

        let included = self.included.read();
        verify!(
            !included.contains(&proposer_index)
                && proposer.is_slashable_at(state.current_epoch()),
            SlashingPoolError::NotSlashable
        );

        verify_proposer_slashing_signatures(&proposer_slashing, proposer, state, verifier, spec)?;

        let pos = pending.partition_point(|existing| existing.proposer_index() < proposer_index);
        pending.insert(pos, proposer_slashing);

        Ok(())
    }

    /// Validate an attester slashing against `state` and insert it at its
    /// sorted position.
    pub fn insert_attester_slashing<S, V>(
        &self,
        attester_slashing: AttesterSlashing,
        state: &S,
        verifier: &V,
        spec: &ChainSpec,
    ) -> Result<(), SlashingPoolError>
    where
        S: RegistryView,
        V: SignatureVerifier,
    {
        let result = self.insert_attester_slashing_inner(attester_slashing, state, verifier, spec);
        match &result {
            Ok(()) => {
                metrics::inc_counter(&metrics::ATTESTER_SLASHINGS_INSERTED);
                metrics::set_gauge(
                    &metrics::ATTESTER_SLASHINGS_IN_POOL,
                    self.num_attester_slashings() as i64,
                );
            }
            Err(_) => metrics::inc_counter(&metrics::ATTESTER_SLASHINGS_REJECTED),
        }
        result
    }

    fn insert_attester_slashing_inner<S, V>(
        &self,
        attester_slashing: AttesterSlashing,
        state: &S,
        verifier: &V,
        spec: &ChainSpec,
    ) -> Result<(), SlashingPoolError>
    where
        S: RegistryView,
        V: SignatureVerifier,
    {
        let mut pending = self.attester_slashings.write();

        verify_attester_slashing(&attester_slashing)?;

        verify!(
            !pending
                .iter()
                .any(|existing| existing.slashing == attester_slashing),
            SlashingPoolError::AlreadyPending
        );

        for attestation in [
            &attester_slashing.attestation_1,
            &attester_slashing.attestation_2,
        ] {
            let signature_set = indexed_attestation_signature_set(state, attestation, spec)?;
            verify!(
                signature_set.verify(verifier),
                SlashingPoolError::InvalidSignature
            );
        }

        let included = self.included.read();
        let slashable_indices =
            get_slashable_indices_modular(state, &attester_slashing, |index, validator| {
                validator.is_slashable_at(state.current_epoch()) && !included.contains(&index)
            })?;

        let pos = pending.partition_point(|existing| {
            existing.slashable_indices.len() >= slashable_indices.len()
        });
        pending.insert(
            pos,
            PendingAttesterSlashing {
                slashing: attester_slashing,
                slashable_indices,
            },
        );

        Ok(())
    }

    /// Record that a proposer slashing was included in an accepted block.
    ///
    /// Removes the exact matching entry if it is pending; the proposer index
    /// is recorded as settled either way, since blocks may carry evidence
    /// this node never saw pending.
    pub fn mark_included_proposer_slashing(&self, proposer_slashing: &ProposerSlashing) {
        let mut pending = self.proposer_slashings.write();
        if let Some(pos) = pending
            .iter()
            .position(|existing| existing == proposer_slashing)
        {
            // `remove` compacts in place, keeping the remaining entries in
            // their relative order.
            pending.remove(pos);
        }
        self.included
            .write()
            .insert(proposer_slashing.proposer_index());

        metrics::set_gauge(&metrics::PROPOSER_SLASHINGS_IN_POOL, pending.len() as i64);
    }

    /// Record that an attester slashing was included in an accepted block.
    ///
    /// Every validator in the intersection of the two attestations is
    /// recorded as settled.
    pub fn mark_included_attester_slashing(&self, attester_slashing: &AttesterSlashing) {
        let mut pending = self.attester_slashings.write();
        if let Some(pos) = pending
            .iter()
            .position(|existing| &existing.slashing == attester_slashing)
        {
            pending.remove(pos);
        }
        self.included
            .write()
            .extend(intersecting_indices(attester_slashing));

        metrics::set_gauge(&metrics::ATTESTER_SLASHINGS_IN_POOL, pending.len() as i64);
    }

    /// Proposer slashings ready for block inclusion, lowest proposer index
    /// first, capped at the per-block maximum.
    ///
    /// Entries whose subject has stopped being slashable since insertion are
    /// skipped, not evicted: the pool only shrinks via `mark_included_*`.
    pub fn pending_proposer_slashings<S: RegistryView>(
        &self,
        state: &S,
        spec: &ChainSpec,
    ) -> Vec<ProposerSlashing> {
        let _timer = metrics::start_timer(&metrics::PENDING_RETRIEVAL_TIME);
        let pending = self.proposer_slashings.read();
        let included = self.included.read();

        filter_limit_operations(
            pending.iter(),
            |slashing| {
                let proposer_index = slashing.proposer_index();
                !included.contains(&proposer_index)
                    && state.validator(proposer_index).map_or(false, |validator| {
                        validator.is_slashable_at(state.current_epoch())
                    })
            },
            spec.max_proposer_slashings as usize,
        )
    }

    /// Attester slashings ready for block inclusion, most slashable
    /// validators first, capped at the per-block maximum.
    pub fn pending_attester_slashings<S: RegistryView>(
        &self,
        state: &S,
        spec: &ChainSpec,
    ) -> Vec<AttesterSlashing> {
        let _timer = metrics::start_timer(&metrics::PENDING_RETRIEVAL_TIME);
        let pending = self.attester_slashings.read();
        let included = self.included.read();

        pending
            .iter()
            .filter(|pending_slashing| {
                pending_slashing.slashable_indices.iter().any(|index| {
                    !included.contains(index)
                        && state.validator(*index).map_or(false, |validator| {
                            validator.is_slashable_at(state.current_epoch())
                        })
                })
            })
            .take(spec.max_attester_slashings as usize)
            .map(|pending_slashing| pending_slashing.slashing.clone())
            .collect()
    }

    /// Total number of proposer slashings in the pool.
    pub fn num_proposer_slashings(&self) -> usize {
        self.proposer_slashings.read().len()
    }

    /// Total number of attester slashings in the pool.
    pub fn num_attester_slashings(&self) -> usize {
        self.attester_slashings.read().len()
    }
}

/// Filter up to a maximum number of operations out of an iterator.
fn filter_limit_operations<'a, T: 'a, I, F>(operations: I, filter: F, limit: usize) -> Vec<T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> bool,
    T: Clone,
{
    operations
        .into_iter()
        .filter(|x| filter(*x))
        .take(limit)
        .cloned()
        .collect()
}
