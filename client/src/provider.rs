//! The capability object handed to every action: a cluster connection plus the signing wallet.

use solana_address::Address;
use solana_instruction::Instruction;
use solana_keypair::{
    Keypair,
    Signer,
};
use solana_sdk::signature::Signature;

use crate::{
    cluster::Cluster,
    config::BankClientConfig,
    error::{
        BankError,
        BankErrorKind,
    },
};

/// A cheap, transient bundle of the cluster, the wallet, and the action config. Build one per
/// action; it holds nothing that outlives the call.
pub struct Provider<'a, C> {
    cluster: &'a C,
    wallet: &'a Keypair,
    config: BankClientConfig,
}

impl<'a, C: Cluster> Provider<'a, C> {
    /// A provider with [`BankClientConfig::default`].
    pub fn new(cluster: &'a C, wallet: &'a Keypair) -> Self {
        Self::with_config(cluster, wallet, Default::default())
    }

    pub fn with_config(cluster: &'a C, wallet: &'a Keypair, config: BankClientConfig) -> Self {
        Self {
            cluster,
            wallet,
            config,
        }
    }

    /// Builds a provider from optionally-present parts, failing with
    /// [`BankErrorKind::ProviderUnavailable`] if either the cluster or the wallet is missing.
    pub fn try_new(
        cluster: Option<&'a C>,
        wallet: Option<&'a Keypair>,
        config: BankClientConfig,
    ) -> Result<Self, BankError> {
        match (cluster, wallet) {
            (Some(cluster), Some(wallet)) => Ok(Self::with_config(cluster, wallet, config)),
            (None, _) => Err(BankError::msg(
                BankErrorKind::ProviderUnavailable,
                "No cluster connection",
            )),
            (_, None) => Err(BankError::msg(
                BankErrorKind::ProviderUnavailable,
                "No wallet connected",
            )),
        }
    }

    pub fn cluster(&self) -> &'a C {
        self.cluster
    }

    pub fn wallet(&self) -> &'a Keypair {
        self.wallet
    }

    pub fn wallet_address(&self) -> Address {
        self.wallet.pubkey()
    }

    pub fn config(&self) -> &BankClientConfig {
        &self.config
    }

    /// Signs with the wallet as payer and submits.
    pub async fn send(&self, instructions: &[Instruction]) -> Result<Signature, BankError> {
        self.cluster
            .send_instructions(self.wallet, instructions)
            .await
    }
}
