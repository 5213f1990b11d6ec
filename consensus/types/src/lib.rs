//! Consensus types consumed by the slashing evidence pool.
//!
//! The beacon state itself lives elsewhere; this crate only defines the
//! objects that cross the pool's boundary, plus the read-only `RegistryView`
//! capability through which validator status is observed.

#[macro_use]
mod macros;

pub mod attestation_data;
pub mod attester_slashing;
pub mod beacon_block_header;
pub mod chain_spec;
pub mod checkpoint;
pub mod fork;
pub mod fork_data;
pub mod indexed_attestation;
pub mod proposer_slashing;
pub mod public_key_bytes;
pub mod registry;
pub mod signature_bytes;
pub mod signed_beacon_block_header;
pub mod signing_data;
pub mod slot_epoch;
pub mod validator;

pub use crate::attestation_data::AttestationData;
pub use crate::attester_slashing::AttesterSlashing;
pub use crate::beacon_block_header::BeaconBlockHeader;
pub use crate::chain_spec::{ChainSpec, Domain};
pub use crate::checkpoint::Checkpoint;
pub use crate::fork::Fork;
pub use crate::fork_data::ForkData;
pub use crate::indexed_attestation::IndexedAttestation;
pub use crate::proposer_slashing::ProposerSlashing;
pub use crate::public_key_bytes::PublicKeyBytes;
pub use crate::registry::RegistryView;
pub use crate::signature_bytes::SignatureBytes;
pub use crate::signed_beacon_block_header::SignedBeaconBlockHeader;
pub use crate::signing_data::{SignedRoot, SigningData};
pub use crate::slot_epoch::{Epoch, Slot};
pub use crate::validator::Validator;

pub type Hash256 = ethereum_types::H256;

/// Byte length of a compressed BLS public key.
pub const PUBLIC_KEY_BYTES_LEN: usize = 48;

/// Byte length of a (possibly aggregate) compressed BLS signature.
pub const SIGNATURE_BYTES_LEN: usize = 96;
