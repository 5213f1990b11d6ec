use crate::{Epoch, PublicKeyBytes};
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// Registry record for a single staking participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Validator {
    pub pubkey: PublicKeyBytes,
    pub activation_epoch: Epoch,
    pub exit_epoch: Epoch,
    pub slashed: bool,
}

impl Validator {
    /// Returns `true` if the validator is considered active at some epoch.
    pub fn is_active_at(&self, epoch: Epoch) -> bool {
        self.activation_epoch <= epoch && epoch < self.exit_epoch
    }

    /// Returns `true` if the validator is considered exited at some epoch.
    pub fn is_exited_at(&self, epoch: Epoch) -> bool {
        self.exit_epoch <= epoch
    }

    /// Returns `true` if the validator may still be punished for a rule
    /// violation at `epoch`: not yet slashed, already activated, and the exit
    /// epoch (if any was set) has not elapsed.
    pub fn is_slashable_at(&self, epoch: Epoch) -> bool {
        !self.slashed && self.is_active_at(epoch)
    }
}

impl Default for Validator {
    /// Yields a "default" `Validator`. Primarily used for testing.
    fn default() -> Self {
        Self {
            pubkey: PublicKeyBytes::empty(),
            activation_epoch: Epoch::max_value(),
            exit_epoch: Epoch::max_value(),
            slashed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(activation: u64, exit: u64) -> Validator {
        Validator {
            activation_epoch: Epoch::new(activation),
            exit_epoch: Epoch::new(exit),
            ..Validator::default()
        }
    }

    #[test]
    fn slashable_window_tracks_activation_and_exit() {
        let v = validator(2, 10);

        assert!(!v.is_slashable_at(Epoch::new(1)));
        assert!(v.is_slashable_at(Epoch::new(2)));
        assert!(v.is_slashable_at(Epoch::new(9)));
        assert!(!v.is_slashable_at(Epoch::new(10)));
        assert!(v.is_exited_at(Epoch::new(10)));
    }

    #[test]
    fn slashed_validator_is_not_slashable() {
        let mut v = validator(0, u64::MAX);
        assert!(v.is_slashable_at(Epoch::new(5)));

        v.slashed = true;
        assert!(!v.is_slashable_at(Epoch::new(5)));
    }

    #[test]
    fn unset_exit_epoch_is_slashable_forever() {
        let v = validator(0, u64::MAX);
        assert!(v.is_slashable_at(Epoch::new(u64::MAX - 1)));
    }
}
