//! Client-side utilities for interacting with the `solbank` program.
//!
//! Includes the cluster abstraction and its RPC implementation, the provider handed to every
//! action, the create/list/deposit/withdraw actions, the cached bank list view, and pretty-printing
//! utilities.

pub mod actions;
pub mod cluster;
pub mod config;
pub mod e2e_helpers;
pub mod error;
pub mod logs;
pub mod provider;
pub mod transactions;
pub mod views;

pub use config::BankClientConfig;
pub use error::{
    BankError,
    BankErrorKind,
};
pub use logs::LogColor;
pub use provider::Provider;
