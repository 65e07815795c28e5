//! Runs every bank action once against a local test validator with the program deployed.

use client::{
    actions::{
        create_bank,
        deposit_bank,
        withdraw_bank,
    },
    transactions::CustomRpcClient,
    views::BankList,
    Provider,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let rpc = CustomRpcClient::default();
    let wallet = rpc.fund_new_account().await?;
    let provider = Provider::new(&rpc, &wallet);

    let bank = create_bank(&provider).await?;
    deposit_bank(&provider, &bank).await?;

    let mut banks = BankList::default();
    banks.refresh(&rpc, provider.config()).await?;
    println!("{:#?}", banks.snapshot().find(&bank));

    let withdrawal = withdraw_bank(&provider, &bank).await?;
    println!("Transaction signature: {}", withdrawal.signature);

    Ok(())
}
