//! Tunables for the bank actions. Defaults match the deployed browser client; the CLI and tests
//! override them.

use solbank_interface::LAMPORTS_PER_SOL;

pub const DEFAULT_BANK_NAME: &str = "wsos bank";

/// 0.1 SOL.
pub const DEFAULT_DEPOSIT_AMOUNT: u64 = LAMPORTS_PER_SOL / 10;

pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 16;

/// Which account the withdrawal amount is computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum_macros::Display)]
pub enum WithdrawSource {
    /// The bank being withdrawn from: its lamports minus its own rent-exempt minimum.
    #[default]
    BankAccount,
    /// The program id's account, regardless of which bank is targeted. Kept only to reproduce
    /// the behavior of the browser client this replaces.
    ProgramAccount,
}

/// What a list refresh does when some accounts fail to fetch or decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum_macros::Display)]
pub enum RefreshPolicy {
    /// Any failure discards the whole refresh.
    #[default]
    AllOrNothing,
    /// Keep the banks that decoded and report the rest.
    Partial,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankClientConfig {
    /// The label `create` gives a new bank.
    pub bank_name: String,
    /// Lamports sent by each deposit.
    pub deposit_amount: u64,
    pub withdraw_source: WithdrawSource,
    /// Upper bound on in-flight account fetches during a list refresh. Zero is treated as one.
    pub max_concurrent_fetches: usize,
    pub refresh_policy: RefreshPolicy,
}

impl Default for BankClientConfig {
    fn default() -> Self {
        Self {
            bank_name: DEFAULT_BANK_NAME.into(),
            deposit_amount: DEFAULT_DEPOSIT_AMOUNT,
            withdraw_source: Default::default(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            refresh_policy: Default::default(),
        }
    }
}

impl BankClientConfig {
    pub fn fetch_concurrency(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }
}
