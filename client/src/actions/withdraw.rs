use solana_address::Address;
use solana_sdk::signature::Signature;
use solbank_interface::{
    instructions::{
        AmountInstructionData,
        Withdraw,
    },
    program,
};

use crate::{
    actions::log_outcome,
    cluster::Cluster,
    config::{
        BankClientConfig,
        WithdrawSource,
    },
    error::{
        BankError,
        BankErrorKind,
    },
    logs::fmt_sol,
    provider::Provider,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    pub signature: Signature,
    /// Lamports requested from the program.
    pub amount: u64,
}

/// Withdraws everything above the rent-exempt minimum from `bank` back to the wallet.
///
/// The amount is computed by [`withdrawable_amount`] before anything is sent; if there's nothing
/// to withdraw the call fails locally with [`BankErrorKind::NothingToWithdraw`].
pub async fn withdraw_bank<C: Cluster>(
    provider: &Provider<'_, C>,
    bank: &Address,
) -> Result<Withdrawal, BankError> {
    log_outcome("Withdraw", try_withdraw_bank(provider, bank).await, |w| {
        format!("{} from {bank}", fmt_sol(w.amount))
    })
}

async fn try_withdraw_bank<C: Cluster>(
    provider: &Provider<'_, C>,
    bank: &Address,
) -> Result<Withdrawal, BankError> {
    let amount = withdrawable_amount(provider.cluster(), provider.config(), bank).await?;
    let ixn = Withdraw {
        bank: *bank,
        user: provider.wallet_address(),
    }
    .create_instruction(AmountInstructionData::new(amount));
    let signature = provider.send(&[ixn]).await?;

    Ok(Withdrawal { signature, amount })
}

/// `balance(source) - minimum_balance_for_rent_exemption(data_len(source))`, where `source` is
/// picked by [`BankClientConfig::withdraw_source`].
pub async fn withdrawable_amount<C: Cluster>(
    cluster: &C,
    config: &BankClientConfig,
    bank: &Address,
) -> Result<u64, BankError> {
    let source = match config.withdraw_source {
        WithdrawSource::BankAccount => *bank,
        WithdrawSource::ProgramAccount => program::ID,
    };

    let account = cluster.account(&source).await?.ok_or_else(|| {
        BankError::msg(
            BankErrorKind::AccountNotFound,
            format!("Account {source} doesn't exist"),
        )
    })?;
    let rent_exempt_minimum = cluster
        .minimum_balance_for_rent_exemption(account.data.len())
        .await?;
    let balance = cluster.balance(&source).await?;

    match balance.checked_sub(rent_exempt_minimum) {
        Some(amount) if amount > 0 => Ok(amount),
        _ => Err(BankError::msg(
            BankErrorKind::NothingToWithdraw,
            format!("{source} holds {balance} lamports, {rent_exempt_minimum} are needed for rent"),
        )),
    }
}
