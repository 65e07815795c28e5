use client::{
    actions::{
        create_bank,
        deposit_bank,
        withdraw_bank,
    },
    config::DEFAULT_DEPOSIT_AMOUNT,
    e2e_helpers::{
        in_memory::rent_exempt_minimum,
        E2e,
        DEFAULT_FUND_AMOUNT,
    },
    BankClientConfig,
};
use solana_keypair::Signer;
use solbank_interface::{
    seeds::find_bank_address,
    state::BANK_ACCOUNT_SPACE,
    LAMPORTS_PER_SOL,
};

#[tokio::test]
async fn create_then_list_shows_one_empty_bank() {
    let mut e2e = E2e::default();

    let bank = create_bank(&e2e.provider()).await.unwrap();
    assert_eq!(bank, find_bank_address(&e2e.wallet.pubkey()).0);

    e2e.refresh().await.unwrap();
    let snapshot = e2e.banks.snapshot();
    assert_eq!(snapshot.len(), 1);

    let row = snapshot.find(&bank).expect("New bank should be listed");
    assert_eq!(row.name, "wsos bank");
    assert_eq!(row.balance, 0);
    assert_eq!(row.owner, e2e.wallet.pubkey());
    assert_eq!(row.lamports, rent_exempt_minimum(BANK_ACCOUNT_SPACE));
}

#[tokio::test]
async fn deposit_shows_up_only_after_refresh() {
    let mut e2e = E2e::default();
    let bank = create_bank(&e2e.provider()).await.unwrap();
    e2e.refresh().await.unwrap();

    deposit_bank(&e2e.provider(), &bank).await.unwrap();

    // The cached list isn't refreshed by a deposit.
    assert_eq!(e2e.banks.snapshot().find(&bank).unwrap().balance, 0);

    e2e.refresh().await.unwrap();
    let row = e2e.banks.snapshot().find(&bank).unwrap();
    assert_eq!(row.balance, LAMPORTS_PER_SOL / 10);
    assert_eq!(row.balance, DEFAULT_DEPOSIT_AMOUNT);
    assert_eq!(
        row.lamports,
        rent_exempt_minimum(BANK_ACCOUNT_SPACE) + DEFAULT_DEPOSIT_AMOUNT
    );
}

#[tokio::test]
async fn deposit_changes_only_the_target_bank() {
    let mut e2e = E2e::default();
    let other_wallet = e2e.fund_new_wallet();

    let mine = create_bank(&e2e.provider()).await.unwrap();
    let theirs = create_bank(&e2e.provider_for(&other_wallet)).await.unwrap();

    // Anyone can deposit into any bank.
    deposit_bank(&e2e.provider(), &theirs).await.unwrap();
    deposit_bank(&e2e.provider(), &theirs).await.unwrap();

    e2e.refresh().await.unwrap();
    let snapshot = e2e.banks.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.find(&mine).unwrap().balance, 0);
    assert_eq!(
        snapshot.find(&theirs).unwrap().balance,
        2 * DEFAULT_DEPOSIT_AMOUNT
    );
}

#[tokio::test]
async fn configured_deposit_amount_and_name() {
    let mut e2e = E2e::new(BankClientConfig {
        bank_name: "rainy day".into(),
        deposit_amount: 42,
        ..Default::default()
    });

    let bank = create_bank(&e2e.provider()).await.unwrap();
    deposit_bank(&e2e.provider(), &bank).await.unwrap();
    e2e.refresh().await.unwrap();

    let row = e2e.banks.snapshot().find(&bank).unwrap();
    assert_eq!(row.name, "rainy day");
    assert_eq!(row.balance, 42);
}

#[tokio::test]
async fn full_round_trip_returns_deposits_to_wallet() {
    let mut e2e = E2e::default();
    let wallet = e2e.wallet.pubkey();

    let bank = create_bank(&e2e.provider()).await.unwrap();
    deposit_bank(&e2e.provider(), &bank).await.unwrap();
    let after_deposit = e2e.cluster.lamports(&wallet);

    let withdrawal = withdraw_bank(&e2e.provider(), &bank).await.unwrap();
    assert_eq!(withdrawal.amount, DEFAULT_DEPOSIT_AMOUNT);
    assert_eq!(e2e.cluster.lamports(&wallet), after_deposit + DEFAULT_DEPOSIT_AMOUNT);
    assert_eq!(
        e2e.cluster.lamports(&wallet),
        DEFAULT_FUND_AMOUNT - rent_exempt_minimum(BANK_ACCOUNT_SPACE)
    );

    e2e.refresh().await.unwrap();
    let row = e2e.banks.snapshot().find(&bank).unwrap();
    assert_eq!(row.balance, 0);
    assert_eq!(row.lamports, rent_exempt_minimum(BANK_ACCOUNT_SPACE));
    assert_eq!(e2e.cluster.sent_transactions(), 3);
}
