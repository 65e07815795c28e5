use std::cell::Cell;

use client::{
    actions::{
        create_bank,
        deposit_bank,
        fetch_banks,
    },
    cluster::Cluster,
    config::RefreshPolicy,
    e2e_helpers::{
        in_memory::InMemoryCluster,
        E2e,
    },
    BankClientConfig,
    BankError,
    BankErrorKind,
};
use solana_account::Account;
use solana_address::Address;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_sdk::signature::Signature;
use solbank_interface::program;

/// Wraps a cluster so account fetches suspend once before answering, recording how many overlap.
struct OverlapTracker<'a> {
    inner: &'a InMemoryCluster,
    in_flight: Cell<usize>,
    peak: Cell<usize>,
}

impl<'a> OverlapTracker<'a> {
    fn new(inner: &'a InMemoryCluster) -> Self {
        Self {
            inner,
            in_flight: Cell::new(0),
            peak: Cell::new(0),
        }
    }
}

impl Cluster for OverlapTracker<'_> {
    async fn program_accounts(&self, program_id: &Address) -> Result<Vec<Address>, BankError> {
        self.inner.program_accounts(program_id).await
    }

    async fn account(&self, address: &Address) -> Result<Option<Account>, BankError> {
        self.in_flight.set(self.in_flight.get() + 1);
        self.peak.set(self.peak.get().max(self.in_flight.get()));
        tokio::task::yield_now().await;
        let account = self.inner.account(address).await;
        self.in_flight.set(self.in_flight.get() - 1);
        account
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, BankError> {
        self.inner.minimum_balance_for_rent_exemption(data_len).await
    }

    async fn balance(&self, address: &Address) -> Result<u64, BankError> {
        self.inner.balance(address).await
    }

    async fn send_instructions(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> Result<Signature, BankError> {
        self.inner.send_instructions(payer, instructions).await
    }
}

#[tokio::test]
async fn empty_program_lists_nothing() {
    let mut e2e = E2e::default();
    e2e.refresh().await.unwrap();
    assert!(e2e.banks.snapshot().is_empty());
    assert!(e2e.banks.snapshot().fetched_at().is_some());
}

#[tokio::test]
async fn failed_fetch_leaves_cache_unchanged() {
    let mut e2e = E2e::default();
    let first = create_bank(&e2e.provider()).await.unwrap();
    e2e.refresh().await.unwrap();
    let before = e2e.banks.snapshot().clone();

    // A second bank appears and gets a deposit, but one of the fetches fails.
    let other = e2e.fund_new_wallet();
    let second = create_bank(&e2e.provider_for(&other)).await.unwrap();
    deposit_bank(&e2e.provider(), &first).await.unwrap();
    e2e.cluster.fail_account_fetch(second);

    let err = e2e.refresh().await.unwrap_err();
    assert_eq!(err.kind(), BankErrorKind::Rpc);

    let after = e2e.banks.snapshot();
    assert_eq!(after.banks(), before.banks());
    assert_eq!(after.fetched_at(), before.fetched_at());
    assert_eq!(after.find(&first).unwrap().balance, 0);
    assert!(after.find(&second).is_none());

    // Once the cluster recovers, both banks show up with fresh balances.
    e2e.cluster.clear_fetch_failures();
    e2e.refresh().await.unwrap();
    assert_eq!(e2e.banks.snapshot().len(), 2);
    assert!(e2e.banks.snapshot().find(&first).unwrap().balance > 0);
}

#[tokio::test]
async fn undecodable_program_account_aborts_all_or_nothing() {
    let e2e = E2e::default();
    create_bank(&e2e.provider()).await.unwrap();
    e2e.cluster.set_account(
        Address::new_unique(),
        Account::new(1, 16, &program::ID),
    );

    let err = fetch_banks(&e2e.cluster, &e2e.config).await.unwrap_err();
    assert_eq!(err.kind(), BankErrorKind::Decode);
}

#[tokio::test]
async fn partial_policy_keeps_successes_and_reports_failures() {
    let mut e2e = E2e::new(BankClientConfig {
        refresh_policy: RefreshPolicy::Partial,
        ..Default::default()
    });
    let good = create_bank(&e2e.provider()).await.unwrap();
    let other = e2e.fund_new_wallet();
    let bad = create_bank(&e2e.provider_for(&other)).await.unwrap();
    e2e.cluster.fail_account_fetch(bad);

    let failures = e2e
        .banks
        .refresh(&e2e.cluster, &e2e.config)
        .await
        .unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].address, bad);
    assert_eq!(failures[0].error.kind(), BankErrorKind::Rpc);

    let snapshot = e2e.banks.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.find(&good).is_some());
}

#[tokio::test]
async fn many_banks_with_bounded_concurrency() {
    let e2e = E2e::new(BankClientConfig {
        max_concurrent_fetches: 2,
        ..Default::default()
    });
    let mut expected = vec![];
    for _ in 0..7 {
        let wallet = e2e.fund_new_wallet();
        expected.push(create_bank(&e2e.provider_for(&wallet)).await.unwrap());
    }

    let tracker = OverlapTracker::new(&e2e.cluster);
    let fetched = fetch_banks(&tracker, &e2e.config).await.unwrap();
    assert!(fetched.failures.is_empty());
    assert_eq!(tracker.peak.get(), 2);
    assert_eq!(tracker.in_flight.get(), 0);

    let mut listed: Vec<_> = fetched.banks.iter().map(|bank| bank.address).collect();
    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn default_concurrency_overlaps_every_fetch() {
    let e2e = E2e::default();
    for _ in 0..5 {
        let wallet = e2e.fund_new_wallet();
        create_bank(&e2e.provider_for(&wallet)).await.unwrap();
    }

    let tracker = OverlapTracker::new(&e2e.cluster);
    let fetched = fetch_banks(&tracker, &e2e.config).await.unwrap();
    assert_eq!(fetched.banks.len(), 5);
    assert_eq!(tracker.peak.get(), 5);
}
