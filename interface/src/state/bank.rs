use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;
use static_assertions::const_assert;

use crate::{
    error::SolbankError,
    instructions::{
        Discriminator,
        DISCRIMINATOR_LEN,
    },
};

/// `sha256("account:Bank")[..8]`.
pub const BANK_ACCOUNT_DISCRIMINATOR: Discriminator =
    [0x8e, 0x31, 0xa6, 0xf2, 0x32, 0x42, 0x61, 0xbc];

/// The data length the program allocates for every bank account on `create`.
pub const BANK_ACCOUNT_SPACE: usize = 5000;

/// Discriminator + an empty name's length prefix + balance + owner.
pub const BANK_ACCOUNT_MIN_LEN: usize = DISCRIMINATOR_LEN + 4 + 8 + 32;

const_assert!(BANK_ACCOUNT_MIN_LEN <= BANK_ACCOUNT_SPACE);

/// The decoded contents of a bank account.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Bank {
    /// The label passed to `create`.
    pub name: String,
    /// The deposited balance recorded by the program, in lamports.
    pub balance: u64,
    owner: [u8; 32],
}

impl Bank {
    pub fn new(name: impl Into<String>, balance: u64, owner: Address) -> Self {
        Self {
            name: name.into(),
            balance,
            owner: owner.to_bytes(),
        }
    }

    /// The wallet that created the bank and is allowed to withdraw from it.
    pub fn owner(&self) -> Address {
        Address::from(self.owner)
    }

    /// Decodes raw account data. Trailing bytes past the Borsh body are the program's zeroed
    /// preallocation and are ignored.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self, SolbankError> {
        if data.len() < BANK_ACCOUNT_MIN_LEN {
            return Err(SolbankError::InsufficientByteLength);
        }
        let (discriminator, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != BANK_ACCOUNT_DISCRIMINATOR {
            return Err(SolbankError::InvalidAccountDiscriminant);
        }

        Self::deserialize(&mut body).map_err(|_| SolbankError::InvalidAccountData)
    }

    /// Encodes the bank the way the program stores it, zero-padded to `space` bytes.
    pub fn pack_account_data(&self, space: usize) -> Result<Vec<u8>, SolbankError> {
        let mut data = BANK_ACCOUNT_DISCRIMINATOR.to_vec();
        self.serialize(&mut data)
            .map_err(|_| SolbankError::InvalidAccountData)?;
        if data.len() > space {
            return Err(SolbankError::InsufficientByteLength);
        }
        data.resize(space, 0);

        Ok(data)
    }
}
