use crate::IndexedAttestation;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// Two conflicting attestations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}
