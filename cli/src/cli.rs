use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
use client::{
    config::{
        RefreshPolicy,
        WithdrawSource,
        DEFAULT_BANK_NAME,
        DEFAULT_DEPOSIT_AMOUNT,
        DEFAULT_MAX_CONCURRENT_FETCHES,
    },
    transactions::DEFAULT_RPC_URL,
    BankClientConfig,
};
use solana_address::Address;

#[derive(Parser)]
#[command(name = "solbank", about = "Create, list, deposit into and withdraw from solbank accounts")]
pub struct CliArgs {
    /// RPC endpoint of the cluster the program is deployed on.
    #[arg(short = 'u', long, env = "SOLBANK_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub url: String,

    /// Path to a JSON keypair file. Falls back to the `SOLBANK_SECRET_KEY` environment variable.
    #[arg(short = 'k', long)]
    pub keypair: Option<PathBuf>,

    /// Compute withdrawals from the program account's balance instead of the bank's, as the
    /// browser client does.
    #[arg(long)]
    pub legacy_withdraw: bool,

    /// Keep the banks that decoded when some fail to fetch, instead of discarding the refresh.
    #[arg(long)]
    pub partial: bool,

    /// Max in-flight account fetches while listing.
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_FETCHES)]
    pub max_concurrent_fetches: usize,

    /// Print transaction signatures as they land.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create the wallet's bank.
    Create {
        /// The bank's label.
        #[arg(long, default_value = DEFAULT_BANK_NAME)]
        name: String,
    },
    /// List every bank owned by the program.
    List,
    /// Deposit into a bank.
    Deposit {
        bank: Address,
        /// Lamports to deposit.
        #[arg(long, default_value_t = DEFAULT_DEPOSIT_AMOUNT)]
        amount: u64,
        /// List the banks again afterwards.
        #[arg(long)]
        refresh: bool,
    },
    /// Withdraw everything above the rent-exempt minimum from a bank you own.
    Withdraw {
        bank: Address,
        /// List the banks again afterwards.
        #[arg(long)]
        refresh: bool,
    },
}

impl Command {
    /// Whether the command signs a transaction. Listing is read-only and runs without a wallet.
    pub fn needs_wallet(&self) -> bool {
        !matches!(self, Command::List)
    }
}

impl CliArgs {
    pub fn bank_client_config(&self) -> BankClientConfig {
        let mut config = BankClientConfig {
            withdraw_source: match self.legacy_withdraw {
                true => WithdrawSource::ProgramAccount,
                false => WithdrawSource::BankAccount,
            },
            refresh_policy: match self.partial {
                true => RefreshPolicy::Partial,
                false => RefreshPolicy::AllOrNothing,
            },
            max_concurrent_fetches: self.max_concurrent_fetches,
            ..Default::default()
        };
        match &self.command {
            Command::Create { name } => config.bank_name = name.clone(),
            Command::Deposit { amount, .. } => config.deposit_amount = *amount,
            Command::List | Command::Withdraw { .. } => {}
        }

        config
    }
}
