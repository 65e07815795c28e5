use solana_address::Address;
use solbank_interface::{
    instructions::{
        Create,
        CreateInstructionData,
    },
    program,
    seeds::find_bank_address_with_program,
    SYSTEM_PROGRAM_ID,
};

use crate::{
    actions::log_outcome,
    cluster::Cluster,
    error::BankError,
    provider::Provider,
};

/// Creates the wallet's bank, labeled with [`crate::BankClientConfig::bank_name`], and returns
/// its address.
///
/// The address is the PDA of [`solbank_interface::seeds::BANK_SEED`] and the wallet's address,
/// so each wallet has at most one bank. Creating it a second time is rejected by the program.
pub async fn create_bank<C: Cluster>(provider: &Provider<'_, C>) -> Result<Address, BankError> {
    log_outcome("Create bank", try_create_bank(provider).await, |bank| {
        bank.to_string()
    })
}

async fn try_create_bank<C: Cluster>(provider: &Provider<'_, C>) -> Result<Address, BankError> {
    let user = provider.wallet_address();
    let (bank, _bump) = find_bank_address_with_program(&user, &program::ID);

    let ixn = Create {
        bank,
        user,
        system_program: SYSTEM_PROGRAM_ID,
    }
    .create_instruction(CreateInstructionData::new(
        provider.config().bank_name.as_str(),
    ))?;

    provider.send(&[ixn]).await?;

    Ok(bank)
}
