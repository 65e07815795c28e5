//! Terminal rendering of the cached bank list: one block per bank with its balance and the
//! commands that act on it.

use chrono::SecondsFormat;
use client::{
    fmt_kv,
    logs::{
        fmt_sol,
        log_divider,
    },
    print_kv,
    views::{
        BankSnapshot,
        BankView,
    },
    LogColor,
};
use itertools::Itertools;

pub fn render_bank_list(snapshot: &BankSnapshot) {
    log_divider();
    if let Some(fetched_at) = snapshot.fetched_at() {
        print_kv!(
            "Fetched at",
            fetched_at.to_rfc3339_opts(SecondsFormat::Millis, false),
            LogColor::Gray
        );
    }
    if snapshot.is_empty() {
        println!("No banks yet. Run `solbank create` to open one.");
    }
    for (index, bank) in display_order(snapshot).into_iter().enumerate() {
        println!("{}", fmt_bank_row(index, bank));
    }
    log_divider();
}

/// Snapshots come back in fetch completion order; sort by name, then address, for display.
pub fn display_order(snapshot: &BankSnapshot) -> Vec<&BankView> {
    snapshot
        .banks()
        .iter()
        .sorted_by(|a, b| a.name.cmp(&b.name).then_with(|| a.address.cmp(&b.address)))
        .collect()
}

pub fn fmt_bank_row(index: usize, bank: &BankView) -> String {
    [
        fmt_kv!(
            format!("[{index}] {}", bank.name),
            fmt_sol(bank.balance),
            LogColor::Highlight,
            LogColor::Info
        ),
        format!("    {}", fmt_kv!("address", bank.address, LogColor::Gray)),
        format!("    {}", fmt_kv!("owner", bank.owner, LogColor::Gray)),
        format!(
            "    {}",
            fmt_kv!(
                "actions",
                format!(
                    "solbank deposit {0} | solbank withdraw {0}",
                    bank.address
                ),
                LogColor::Gray
            )
        ),
    ]
    .join("\n")
}
