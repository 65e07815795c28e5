//! Lightweight, nonblocking RPC client for reading `solbank` accounts and sending transactions.

use std::{
    future::Future,
    time::Duration,
};

use anyhow::{
    bail,
    Context,
};
use solana_account::Account;
use solana_address::Address;
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::{
        RpcAccountInfoConfig,
        RpcProgramAccountsConfig,
        UiAccountEncoding,
        UiDataSliceConfig,
    },
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_keypair::{
    Keypair,
    Signer,
};
use solana_sdk::{
    message::Message,
    signature::Signature,
    transaction::Transaction,
};

use crate::{
    cluster::Cluster,
    error::{
        BankError,
        BankErrorKind,
    },
    fmt_kv,
    print_kv,
    LogColor,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        Self::new_from_url(DEFAULT_RPC_URL, Default::default())
    }
}

impl CustomRpcClient {
    pub fn new(client: Option<RpcClient>, config: Option<SendTransactionConfig>) -> Self {
        match (client, config) {
            (Some(client), Some(config)) => Self { client, config },
            (client, config) => {
                let CustomRpcClient {
                    client: default_client,
                    config: default_config,
                } = Default::default();
                Self {
                    client: client.unwrap_or(default_client),
                    config: config.unwrap_or(default_config),
                }
            }
        }
    }

    /// All reads and confirmations use `confirmed` commitment.
    pub fn new_from_url(url: &str, config: SendTransactionConfig) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
            config,
        }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }

    /// Airdrops [`DEFAULT_FUND_AMOUNT`] lamports to `address`. Only works against clusters with a
    /// faucet, e.g. a local test validator.
    pub async fn fund_account(&self, address: &Address) -> anyhow::Result<()> {
        fund(&self.client, address).await
    }

    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let kp = Keypair::new();
        fund(&self.client, &kp.pubkey()).await?;

        Ok(kp)
    }
}

const MAX_TRIES: u8 = 20;

const CONFIRM_INTERVAL: Duration = Duration::from_millis(500);

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

async fn fund(rpc: &RpcClient, address: &Address) -> anyhow::Result<()> {
    let airdrop_signature: Signature = rpc
        .request_airdrop(address, DEFAULT_FUND_AMOUNT)
        .await
        .context("Failed to request airdrop")?;

    let confirmed = poll_until_confirmed(MAX_TRIES, CONFIRM_INTERVAL, || async {
        rpc.confirm_transaction(&airdrop_signature)
            .await
            .context("Couldn't confirm transaction")
    })
    .await?;

    if !confirmed {
        bail!("Airdrop did not land.");
    }

    Ok(())
}

/// Runs `check` once, then up to `retries` more times `interval` apart, until it reports
/// confirmation.
async fn poll_until_confirmed<F, Fut>(
    retries: u8,
    interval: Duration,
    mut check: F,
) -> anyhow::Result<bool>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<bool>>,
{
    for attempt in 0..=retries {
        if check().await? {
            return Ok(true);
        }
        if attempt < retries {
            tokio::time::sleep(interval).await;
        }
    }

    Ok(false)
}

/// Every bank is fetched again on its own, so listing skips the account data entirely.
fn addresses_only_config() -> RpcProgramAccountsConfig {
    RpcProgramAccountsConfig {
        account_config: RpcAccountInfoConfig {
            commitment: Some(CommitmentConfig::confirmed()),
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: Some(UiDataSliceConfig {
                offset: 0,
                length: 0,
            }),
            min_context_slot: None,
        },
        ..Default::default()
    }
}

#[derive(Clone, Default)]
pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Cluster for CustomRpcClient {
    async fn program_accounts(&self, program_id: &Address) -> Result<Vec<Address>, BankError> {
        let accounts = self
            .client
            .get_program_ui_accounts_with_config(program_id, addresses_only_config())
            .await
            .map_err(BankError::from_client_error)?;

        Ok(accounts.into_iter().map(|(address, _)| address).collect())
    }

    async fn account(&self, address: &Address) -> Result<Option<Account>, BankError> {
        self.client
            .get_account_with_commitment(address, CommitmentConfig::confirmed())
            .await
            .map(|response| response.value)
            .map_err(BankError::from_client_error)
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, BankError> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(BankError::from_client_error)
    }

    async fn balance(&self, address: &Address) -> Result<u64, BankError> {
        self.client
            .get_balance(address)
            .await
            .map_err(BankError::from_client_error)
    }

    async fn send_instructions(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> Result<Signature, BankError> {
        send_transaction_with_config(&self.client, payer, instructions, &self.config).await
    }
}

async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    instructions: &[Instruction],
    config: &SendTransactionConfig,
) -> Result<Signature, BankError> {
    let bh = rpc
        .get_latest_blockhash()
        .await
        .map_err(BankError::from_client_error)?;

    let final_instructions: &[Instruction] = &[
        config.compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        }),
        instructions.to_vec(),
    ]
    .concat();

    let msg = Message::new(final_instructions, Some(&payer.pubkey()));

    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(&[payer], bh)
        .map_err(|e| BankError::new(BankErrorKind::Signing, e))?;

    let signature = rpc
        .send_and_confirm_transaction(&tx)
        .await
        .map_err(BankError::from_client_error)?;

    if matches!(config.debug_logs, Some(true)) {
        print_kv!("Signature", signature, LogColor::Debug);
        println!(
            "  {}",
            fmt_kv!("Instructions", final_instructions.len(), LogColor::Gray)
        );
    }

    Ok(signature)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn program_accounts_skip_account_data() {
        let config = addresses_only_config();
        let slice = config.account_config.data_slice.unwrap();
        assert_eq!((slice.offset, slice.length), (0, 0));
        assert_eq!(
            config.account_config.commitment,
            Some(CommitmentConfig::confirmed())
        );
        assert!(config.filters.is_none());
    }

    #[tokio::test]
    async fn confirmation_on_the_last_check_counts() {
        let calls = Cell::new(0u8);
        let confirmed = poll_until_confirmed(3, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            let done = calls.get() == 4;
            async move { Ok(done) }
        })
        .await
        .unwrap();
        assert!(confirmed);
        assert_eq!(calls.get(), 4);
    }

    #[tokio::test]
    async fn gives_up_after_retries() {
        let calls = Cell::new(0u8);
        let confirmed = poll_until_confirmed(3, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { Ok(false) }
        })
        .await
        .unwrap();
        assert!(!confirmed);
        assert_eq!(calls.get(), 4);
    }

    #[tokio::test]
    async fn check_errors_propagate() {
        let result = poll_until_confirmed(3, Duration::ZERO, || async {
            Err(anyhow::anyhow!("node unreachable"))
        })
        .await;
        assert!(result.is_err());
    }
}
