use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

use crate::{
    error::SolbankError,
    instructions::{
        tagged,
        SolbankInstruction,
    },
    program,
};

/// Creates the caller's bank PDA and labels it with `name`.
///
/// ### Accounts
///   0. `[WRITE]` Bank account PDA
///   1. `[WRITE, SIGNER]` User (payer and authority)
///   2. `[READ]` System program
pub struct Create {
    /// The bank PDA derived from [`crate::seeds::BANK_SEED`] and the user's address.
    pub bank: Address,
    /// The user paying for and owning the bank.
    pub user: Address,
    /// The system program.
    pub system_program: Address,
}

impl Create {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.bank, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }

    pub fn create_instruction(
        &self,
        data: CreateInstructionData,
    ) -> Result<Instruction, SolbankError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas(),
            data: tagged(SolbankInstruction::Create, &data.pack()?),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CreateInstructionData {
    /// The bank's display label.
    pub name: String,
}

impl CreateInstructionData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Borsh string layout: a little-endian `u32` length prefix followed by the UTF-8 bytes.
    /// Names longer than `u32::MAX` bytes don't fit the prefix.
    pub fn pack(&self) -> Result<Vec<u8>, SolbankError> {
        borsh::to_vec(self).map_err(|_| SolbankError::InvalidInstructionData)
    }

    pub fn unpack(args: &[u8]) -> Result<Self, SolbankError> {
        Self::deserialize(&mut &args[..]).map_err(|_| SolbankError::InvalidInstructionData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_length_prefixed() {
        let packed = CreateInstructionData::new("wsos bank").pack().unwrap();
        assert_eq!(&packed[..4], &9u32.to_le_bytes());
        assert_eq!(&packed[4..], b"wsos bank");
        assert_eq!(
            CreateInstructionData::unpack(&packed),
            Ok(CreateInstructionData::new("wsos bank"))
        );
    }

    #[test]
    fn truncated_name_is_invalid() {
        let packed = CreateInstructionData::new("wsos bank").pack().unwrap();
        assert_eq!(
            CreateInstructionData::unpack(&packed[..6]),
            Err(SolbankError::InvalidInstructionData)
        );
    }

    #[test]
    fn instruction_data_starts_with_discriminator() {
        let ixn = Create {
            bank: Address::new_unique(),
            user: Address::new_unique(),
            system_program: crate::SYSTEM_PROGRAM_ID,
        }
        .create_instruction(CreateInstructionData::new("a"))
        .unwrap();
        let (tag, args) = SolbankInstruction::split_data(&ixn.data).unwrap();
        assert_eq!(tag, SolbankInstruction::Create);
        assert_eq!(CreateInstructionData::unpack(args).unwrap().name, "a");
    }

    #[test]
    fn multibyte_name_prefix_counts_bytes() {
        let data = CreateInstructionData::new("bänk");
        let packed = data.pack().unwrap();
        assert_eq!(&packed[..4], &5u32.to_le_bytes());
        assert_eq!(packed.len(), 4 + 5);
        assert_eq!(CreateInstructionData::unpack(&packed), Ok(data));
    }
}
