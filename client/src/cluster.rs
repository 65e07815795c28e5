//! The ledger seam every action goes through.
//!
//! [`crate::transactions::CustomRpcClient`] talks to a real cluster over JSON RPC;
//! [`crate::e2e_helpers::in_memory::InMemoryCluster`] executes `solbank` instructions against an
//! in-memory account store for tests.

use solana_account::Account;
use solana_address::Address;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_sdk::signature::Signature;

use crate::error::BankError;

#[allow(async_fn_in_trait)]
pub trait Cluster {
    /// Addresses of every account owned by `program_id` (`getProgramAccounts`).
    async fn program_accounts(&self, program_id: &Address) -> Result<Vec<Address>, BankError>;

    /// The account at `address`, or `None` if it doesn't exist (`getAccountInfo`).
    async fn account(&self, address: &Address) -> Result<Option<Account>, BankError>;

    /// `getMinimumBalanceForRentExemption`.
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize)
        -> Result<u64, BankError>;

    /// Lamports held at `address`; zero for accounts that don't exist (`getBalance`).
    async fn balance(&self, address: &Address) -> Result<u64, BankError>;

    /// Signs `instructions` with `payer` as fee payer and sole signer, then submits and confirms
    /// them as one transaction.
    async fn send_instructions(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> Result<Signature, BankError>;
}
