use client::{
    actions::{
        create_bank,
        deposit_bank,
        withdraw_bank,
        withdrawable_amount,
    },
    config::{
        WithdrawSource,
        DEFAULT_DEPOSIT_AMOUNT,
    },
    e2e_helpers::{
        in_memory::{
            rent_exempt_minimum,
            InMemoryCluster,
        },
        E2e,
    },
    BankClientConfig,
    BankErrorKind,
    Provider,
};
use solana_address::Address;
use solana_keypair::{
    Keypair,
    Signer,
};
use solbank_interface::{
    error::SolbankError,
    program,
    state::BANK_ACCOUNT_SPACE,
    LAMPORTS_PER_SOL,
};

#[tokio::test]
async fn amount_is_bank_lamports_above_rent() {
    let e2e = E2e::default();
    let bank = create_bank(&e2e.provider()).await.unwrap();
    deposit_bank(&e2e.provider(), &bank).await.unwrap();
    deposit_bank(&e2e.provider(), &bank).await.unwrap();

    let amount = withdrawable_amount(&e2e.cluster, &e2e.config, &bank)
        .await
        .unwrap();
    assert_eq!(amount, 2 * DEFAULT_DEPOSIT_AMOUNT);
    assert_eq!(
        e2e.cluster.lamports(&bank) - rent_exempt_minimum(BANK_ACCOUNT_SPACE),
        amount
    );
}

#[tokio::test]
async fn empty_bank_has_nothing_to_withdraw() {
    let e2e = E2e::default();
    let bank = create_bank(&e2e.provider()).await.unwrap();
    let sent = e2e.cluster.sent_transactions();

    let err = withdraw_bank(&e2e.provider(), &bank).await.unwrap_err();
    assert_eq!(err.kind(), BankErrorKind::NothingToWithdraw);
    assert_eq!(e2e.cluster.sent_transactions(), sent);
}

#[tokio::test]
async fn missing_bank_is_not_found() {
    let e2e = E2e::default();
    let err = withdraw_bank(&e2e.provider(), &Address::new_unique())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), BankErrorKind::AccountNotFound);
}

#[tokio::test]
async fn only_the_owner_can_withdraw() {
    let e2e = E2e::default();
    let bank = create_bank(&e2e.provider()).await.unwrap();
    deposit_bank(&e2e.provider(), &bank).await.unwrap();

    let thief = e2e.fund_new_wallet();
    let err = withdraw_bank(&e2e.provider_for(&thief), &bank)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), BankErrorKind::Rejected);
    assert_eq!(err.program_error(), Some(SolbankError::BankOwnerMismatch));
    assert_eq!(
        e2e.cluster.lamports(&bank),
        rent_exempt_minimum(BANK_ACCOUNT_SPACE) + DEFAULT_DEPOSIT_AMOUNT
    );
}

#[tokio::test]
async fn program_account_source_ignores_the_target_bank() {
    let program_data_len = 36;
    let program_lamports = rent_exempt_minimum(program_data_len) + 5 * LAMPORTS_PER_SOL;
    let cluster = InMemoryCluster::with_program_account(program_lamports, program_data_len);
    let config = BankClientConfig {
        withdraw_source: WithdrawSource::ProgramAccount,
        ..Default::default()
    };
    let wallet = Keypair::new();
    cluster.fund(&wallet.pubkey(), 10 * LAMPORTS_PER_SOL);
    let provider = Provider::with_config(&cluster, &wallet, config.clone());

    let bank = create_bank(&provider).await.unwrap();
    deposit_bank(&provider, &bank).await.unwrap();

    // The amount comes from the program's own balance, not the bank's.
    let amount = withdrawable_amount(&cluster, &config, &bank)
        .await
        .unwrap();
    assert_eq!(amount, 5 * LAMPORTS_PER_SOL);

    // Which is more than the bank holds, so the program refuses it.
    let err = withdraw_bank(&provider, &bank).await.unwrap_err();
    assert_eq!(err.kind(), BankErrorKind::Rejected);
    assert_eq!(err.program_error(), Some(SolbankError::InsufficientFunds));
    assert_eq!(cluster.lamports(&program::ID), program_lamports);
}
