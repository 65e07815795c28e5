//! PDA seeds and derivation helpers for `solbank` accounts.

use solana_address::Address;
use solana_pubkey::Pubkey;

use crate::{
    error::SolbankError,
    program,
};

/// The constant label every bank PDA is derived from, followed by the owner's address.
pub const BANK_SEED: &[u8] = b"bankaccount";

/// Finds the bank PDA for `owner` and its canonical bump.
///
/// The program enforces one bank per wallet under this derivation, so the result doubles as the
/// lookup key for a wallet's bank.
pub fn find_bank_address(owner: &Address) -> (Address, u8) {
    find_bank_address_with_program(owner, &program::ID)
}

pub fn find_bank_address_with_program(owner: &Address, program_id: &Address) -> (Address, u8) {
    Pubkey::find_program_address(&[BANK_SEED, owner.as_ref()], program_id)
}

/// Re-derives the bank PDA from an explicit bump, failing if the seeds land on the curve.
pub fn create_bank_address(
    owner: &Address,
    bump: u8,
    program_id: &Address,
) -> Result<Address, SolbankError> {
    Pubkey::create_program_address(&[BANK_SEED, owner.as_ref(), &[bump]], program_id)
        .map_err(|_| SolbankError::AddressDerivationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let owner = Address::new_unique();
        let (first, first_bump) = find_bank_address(&owner);
        let (second, second_bump) = find_bank_address(&owner);
        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);
    }

    #[test]
    fn different_owners_get_different_banks() {
        let (a, _) = find_bank_address(&Address::new_unique());
        let (b, _) = find_bank_address(&Address::new_unique());
        assert_ne!(a, b);
    }

    #[test]
    fn explicit_bump_round_trips() {
        let owner = Address::new_unique();
        let (bank, bump) = find_bank_address(&owner);
        assert_eq!(create_bank_address(&owner, bump, &program::ID), Ok(bank));
    }

    #[test]
    fn program_id_is_part_of_the_derivation() {
        let owner = Address::new_unique();
        let (canonical, _) = find_bank_address(&owner);
        let (other, _) = find_bank_address_with_program(&owner, &Address::new_unique());
        assert_ne!(canonical, other);
    }
}
