use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

use crate::{
    instructions::{
        tagged,
        AmountInstructionData,
        SolbankInstruction,
    },
    program,
};

/// Moves `amount` lamports from a bank back to its owner. The program rejects the withdrawal if
/// the signer isn't the bank's owner or if it would leave the bank below rent exemption.
///
/// ### Accounts
///   0. `[WRITE]` Bank account PDA
///   1. `[WRITE, SIGNER]` User (the bank's owner)
pub struct Withdraw {
    pub bank: Address,
    pub user: Address,
}

impl Withdraw {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.bank, false),
            AccountMeta::new(self.user, true),
        ]
    }

    pub fn create_instruction(&self, data: AmountInstructionData) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas(),
            data: tagged(SolbankInstruction::Withdraw, &data.pack()),
        }
    }
}
