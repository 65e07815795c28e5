//! The four bank actions: create, list, deposit and withdraw.
//!
//! Each action is a single request/response flow that takes the [`crate::Provider`] (or, for the
//! read-only list, just the cluster) explicitly, logs its outcome, and returns it as a
//! [`Result`] with a [`crate::BankError`]. Nothing here retries, and nothing panics on a remote
//! failure.

pub mod create;
pub mod deposit;
pub mod list;
pub mod withdraw;

pub use create::create_bank;
pub use deposit::deposit_bank;
pub use list::{
    fetch_bank,
    fetch_banks,
    FetchFailure,
    FetchedBanks,
};
pub use withdraw::{
    withdraw_bank,
    withdrawable_amount,
    Withdrawal,
};

use crate::{
    eprint_kv,
    error::BankError,
    print_kv,
    LogColor,
};

/// Logs the outcome of an action without altering it.
fn log_outcome<T>(
    action: &str,
    result: Result<T, BankError>,
    describe: impl FnOnce(&T) -> String,
) -> Result<T, BankError> {
    match &result {
        Ok(value) => print_kv!(action, describe(value), LogColor::Header, LogColor::Gray),
        Err(error) => eprint_kv!(format!("{action} failed"), error),
    }

    result
}
