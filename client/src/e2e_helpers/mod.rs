use solana_keypair::{
    Keypair,
    Signer,
};
use solbank_interface::LAMPORTS_PER_SOL;

use crate::{
    config::BankClientConfig,
    e2e_helpers::in_memory::InMemoryCluster,
    provider::Provider,
    views::BankList,
};

pub mod in_memory;

pub const DEFAULT_FUND_AMOUNT: u64 = 10 * LAMPORTS_PER_SOL;

/// Convenience harness for end-to-end tests against an [`InMemoryCluster`].
///
/// Upon instantiation it funds a fresh wallet with [`DEFAULT_FUND_AMOUNT`] lamports and starts
/// with an empty [`BankList`].
pub struct E2e {
    pub cluster: InMemoryCluster,
    pub wallet: Keypair,
    pub banks: BankList,
    pub config: BankClientConfig,
}

impl E2e {
    pub fn new(config: BankClientConfig) -> Self {
        let cluster = InMemoryCluster::new();
        let wallet = fund_new_wallet(&cluster);

        Self {
            cluster,
            wallet,
            banks: BankList::default(),
            config,
        }
    }

    pub fn provider(&self) -> Provider<'_, InMemoryCluster> {
        Provider::with_config(&self.cluster, &self.wallet, self.config.clone())
    }

    /// A provider for some other wallet on the same cluster.
    pub fn provider_for<'a>(&'a self, wallet: &'a Keypair) -> Provider<'a, InMemoryCluster> {
        Provider::with_config(&self.cluster, wallet, self.config.clone())
    }

    pub fn fund_new_wallet(&self) -> Keypair {
        fund_new_wallet(&self.cluster)
    }

    pub async fn refresh(&mut self) -> Result<(), crate::BankError> {
        self.banks.refresh(&self.cluster, &self.config).await.map(drop)
    }
}

impl Default for E2e {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

fn fund_new_wallet(cluster: &InMemoryCluster) -> Keypair {
    let kp = Keypair::new();
    cluster.fund(&kp.pubkey(), DEFAULT_FUND_AMOUNT);

    kp
}
