use solana_address::Address;
use solana_sdk::signature::Signature;
use solbank_interface::{
    instructions::{
        AmountInstructionData,
        Deposit,
    },
    SYSTEM_PROGRAM_ID,
};

use crate::{
    actions::log_outcome,
    cluster::Cluster,
    error::BankError,
    logs::fmt_sol,
    provider::Provider,
};

/// Deposits [`crate::BankClientConfig::deposit_amount`] lamports from the wallet into `bank`.
///
/// `bank` isn't checked locally; it's expected to come from the bank list. The cached list
/// isn't refreshed afterwards, so the new balance only shows up on the next refresh.
pub async fn deposit_bank<C: Cluster>(
    provider: &Provider<'_, C>,
    bank: &Address,
) -> Result<Signature, BankError> {
    let amount = provider.config().deposit_amount;
    let ixn = Deposit {
        bank: *bank,
        user: provider.wallet_address(),
        system_program: SYSTEM_PROGRAM_ID,
    }
    .create_instruction(AmountInstructionData::new(amount));

    log_outcome("Deposit", provider.send(&[ixn]).await, |_| {
        format!("{} into {bank}", fmt_sol(amount))
    })
}
