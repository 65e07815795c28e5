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

/// Transfers `amount` lamports from the user into a bank and credits its recorded balance.
///
/// ### Accounts
///   0. `[WRITE]` Bank account PDA
///   1. `[WRITE, SIGNER]` User (source of the lamports)
///   2. `[READ]` System program
pub struct Deposit {
    /// The bank being deposited into. Any existing bank, not only the user's own.
    pub bank: Address,
    /// The user funding the deposit.
    pub user: Address,
    /// The system program.
    pub system_program: Address,
}

impl Deposit {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.bank, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }

    pub fn create_instruction(&self, data: AmountInstructionData) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas(),
            data: tagged(SolbankInstruction::Deposit, &data.pack()),
        }
    }
}
