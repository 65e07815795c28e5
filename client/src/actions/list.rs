use futures::{
    stream,
    StreamExt,
    TryStreamExt,
};
use itertools::Itertools;
use solana_address::Address;
use solbank_interface::program;

use crate::{
    actions::log_outcome,
    cluster::Cluster,
    config::{
        BankClientConfig,
        RefreshPolicy,
    },
    error::{
        BankError,
        BankErrorKind,
    },
    views::BankView,
};

/// The result of a list fetch. `banks` is in completion order, not sorted.
#[derive(Debug, Default)]
pub struct FetchedBanks {
    pub banks: Vec<BankView>,
    /// Always empty under [`RefreshPolicy::AllOrNothing`].
    pub failures: Vec<FetchFailure>,
}

#[derive(Debug)]
pub struct FetchFailure {
    pub address: Address,
    pub error: BankError,
}

/// Lists every account owned by the `solbank` program, then fetches and decodes each one.
///
/// Fetches run concurrently, at most [`BankClientConfig::fetch_concurrency`] at a time. With
/// [`RefreshPolicy::AllOrNothing`] the first failure aborts the whole fetch.
pub async fn fetch_banks<C: Cluster>(
    cluster: &C,
    config: &BankClientConfig,
) -> Result<FetchedBanks, BankError> {
    log_outcome("Fetch banks", try_fetch_banks(cluster, config).await, |fetched| {
        match fetched.failures.len() {
            0 => format!("{} banks", fetched.banks.len()),
            n => format!("{} banks, {n} failed", fetched.banks.len()),
        }
    })
}

async fn try_fetch_banks<C: Cluster>(
    cluster: &C,
    config: &BankClientConfig,
) -> Result<FetchedBanks, BankError> {
    let addresses = cluster.program_accounts(&program::ID).await?;
    let fetches = stream::iter(addresses)
        .map(|address| async move { (address, fetch_bank(cluster, address).await) })
        .buffer_unordered(config.fetch_concurrency());

    match config.refresh_policy {
        RefreshPolicy::AllOrNothing => {
            let banks = fetches
                .map(|(_, result)| result)
                .try_collect::<Vec<_>>()
                .await?;

            Ok(FetchedBanks {
                banks,
                failures: vec![],
            })
        }
        RefreshPolicy::Partial => {
            let (banks, failures): (Vec<_>, Vec<_>) = fetches
                .collect::<Vec<_>>()
                .await
                .into_iter()
                .partition_map(|(address, result)| match result {
                    Ok(bank) => itertools::Either::Left(bank),
                    Err(error) => itertools::Either::Right(FetchFailure { address, error }),
                });

            Ok(FetchedBanks { banks, failures })
        }
    }
}

/// Fetches and decodes a single bank.
pub async fn fetch_bank<C: Cluster>(cluster: &C, address: Address) -> Result<BankView, BankError> {
    let account = cluster.account(&address).await?.ok_or_else(|| {
        BankError::msg(
            BankErrorKind::AccountNotFound,
            format!("Bank {address} doesn't exist"),
        )
    })?;

    BankView::try_from_account(address, &account)
}
