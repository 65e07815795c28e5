//! Command-line front end for the `solbank` program. See [`cli::CliArgs`].

use anyhow::Context;
use clap::Parser;
use client::{
    actions::{
        create_bank,
        deposit_bank,
        withdraw_bank,
    },
    cluster::Cluster,
    print_kv,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
    views::BankList,
    BankClientConfig,
    LogColor,
    Provider,
};

use crate::{
    cli::{
        CliArgs,
        Command,
    },
    render::render_bank_list,
};

pub mod cli;
pub mod load_env;
pub mod render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.bank_client_config();
    let rpc = CustomRpcClient::new_from_url(
        &args.url,
        SendTransactionConfig {
            compute_budget: None,
            debug_logs: Some(args.verbose),
        },
    );
    print_kv!("Cluster", rpc.url(), LogColor::Gray);

    let wallet = match args.command.needs_wallet() {
        true => load_env::wallet_keypair(args.keypair.as_deref())?,
        false => None,
    };
    let provider = || Provider::try_new(Some(&rpc), wallet.as_ref(), config.clone());
    let mut banks = BankList::default();

    match args.command {
        Command::List => {
            refresh_and_render(&mut banks, &rpc, &config).await?;
        }
        Command::Create { .. } => {
            create_bank(&provider()?).await?;
        }
        Command::Deposit { bank, refresh, .. } => {
            deposit_bank(&provider()?, &bank).await?;
            if refresh {
                refresh_and_render(&mut banks, &rpc, &config).await?;
            }
        }
        Command::Withdraw { bank, refresh } => {
            withdraw_bank(&provider()?, &bank).await?;
            if refresh {
                refresh_and_render(&mut banks, &rpc, &config).await?;
            }
        }
    }

    Ok(())
}

async fn refresh_and_render<C: Cluster>(
    banks: &mut BankList,
    cluster: &C,
    config: &BankClientConfig,
) -> anyhow::Result<()> {
    let failures = banks
        .refresh(cluster, config)
        .await
        .context("Couldn't refresh the bank list")?;
    render_bank_list(banks.snapshot());
    for failure in failures {
        print_kv!(
            format!("Skipped {}", failure.address),
            failure.error,
            LogColor::Warning
        );
    }

    Ok(())
}
