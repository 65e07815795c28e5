//! Read-only views over decoded `solbank` accounts and the cached bank list built from them.

use chrono::{
    DateTime,
    Utc,
};
use solana_account::Account;
use solana_address::Address;
use solbank_interface::{
    program,
    state::Bank,
};

use crate::{
    actions::list::{
        fetch_banks,
        FetchFailure,
        FetchedBanks,
    },
    cluster::Cluster,
    config::BankClientConfig,
    error::{
        BankError,
        BankErrorKind,
    },
};

/// One row of the bank list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankView {
    pub address: Address,
    pub name: String,
    /// The balance recorded by the program, in lamports.
    pub balance: u64,
    pub owner: Address,
    /// Lamports actually held by the account, rent included.
    pub lamports: u64,
}

impl BankView {
    /// Validates that the account is owned by the `solbank` program and decodes it.
    pub fn try_from_account(address: Address, account: &Account) -> Result<Self, BankError> {
        if account.owner != program::ID {
            return Err(BankError::msg(
                BankErrorKind::Decode,
                format!("Account {address} isn't owned by the solbank program"),
            ));
        }
        let bank = Bank::try_from_account_data(&account.data)?;

        Ok(Self {
            address,
            owner: bank.owner(),
            name: bank.name,
            balance: bank.balance,
            lamports: account.lamports,
        })
    }
}

/// An immutable copy of the bank list as of one refresh. Never mutated in place; a refresh
/// produces a new snapshot.
#[derive(Clone, Debug, Default)]
pub struct BankSnapshot {
    banks: Vec<BankView>,
    fetched_at: Option<DateTime<Utc>>,
}

impl BankSnapshot {
    pub fn new(banks: Vec<BankView>) -> Self {
        Self {
            banks,
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn banks(&self) -> &[BankView] {
        &self.banks
    }

    /// `None` until the first successful refresh.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn find(&self, address: &Address) -> Option<&BankView> {
        self.banks.iter().find(|bank| &bank.address == address)
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

/// The locally cached bank list. The only mutation is a whole-snapshot swap.
#[derive(Debug, Default)]
pub struct BankList {
    current: BankSnapshot,
}

impl BankList {
    pub fn snapshot(&self) -> &BankSnapshot {
        &self.current
    }

    /// Swaps in `next` and hands back the previous snapshot.
    pub fn replace(&mut self, next: BankSnapshot) -> BankSnapshot {
        std::mem::replace(&mut self.current, next)
    }

    /// Fetches every bank and swaps the result in.
    ///
    /// If the fetch fails the current snapshot is left exactly as it was. Under
    /// [`crate::config::RefreshPolicy::Partial`] the banks that decoded are swapped in and the
    /// per-account failures are returned.
    pub async fn refresh<C: Cluster>(
        &mut self,
        cluster: &C,
        config: &BankClientConfig,
    ) -> Result<Vec<FetchFailure>, BankError> {
        let FetchedBanks { banks, failures } = fetch_banks(cluster, config).await?;
        self.replace(BankSnapshot::new(banks));

        Ok(failures)
    }
}
