use crate::{Epoch, Fork, Hash256, Validator};

/// Read-only view of the validator registry at some beacon state snapshot.
///
/// The state and its transition logic are owned elsewhere; evidence
/// validation only ever reads validator status and fork information, and it
/// does so through this capability so that it stays decoupled from the state
/// representation.
pub trait RegistryView {
    /// Returns the validator for the given index, if one exists.
    fn validator(&self, validator_index: u64) -> Option<&Validator>;

    /// The epoch the snapshot was taken at.
    fn current_epoch(&self) -> Epoch;

    /// Fork information, used for signing-domain separation.
    fn fork(&self) -> &Fork;

    /// The root all signing domains of this chain are derived from.
    fn genesis_validators_root(&self) -> Hash256;
}
