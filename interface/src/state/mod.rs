//! Account state owned by the `solbank` program.

pub mod bank;

pub use bank::*;
