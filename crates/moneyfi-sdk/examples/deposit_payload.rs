/*
[INPUT]:  Sender address and deposit amount
[OUTPUT]: Unsigned deposit transaction payload
[POS]:    Examples - chain-aware payload request
[UPDATE]: When payload endpoints change
*/

use moneyfi_sdk::*;

/// Example: fetch a deposit payload for the wallet to sign
///
/// The SDK never signs or submits; hand `tx` to your wallet.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    println!("=== MoneyFi Deposit Payload Example ===\n");

    let config = MoneyFiConfig::new(
        vec![ChainSetting::new(
            chain_id::APTOS,
            "https://fullnode.mainnet.aptoslabs.com/v1",
        )],
        "example-integrator",
        "example-key",
    );
    let sdk = match config.apply_env_overrides().and_then(MoneyFi::new) {
        Ok(sdk) => sdk,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let sender = "0x0ae1e1817aaf1cd020151cd117843988d9c524e202ccb2c726151163c782037f";
    let has_account = sdk
        .has_wallet_account(&HasWalletAccountParam {
            sender: sender.to_string(),
        })
        .await;
    match has_account {
        Ok(true) => println!("✓ Wallet account exists"),
        Ok(false) => println!("! No wallet account yet, initialize it first"),
        Err(e) => println!("✗ Error: {}", e),
    }

    let param = TxPayloadDepositParam {
        sender: sender.to_string(),
        chain_id: chain_id::APTOS,
        token_address: sdk.constants().aptos_usdc.to_string(),
        amount: 1_000_000,
    };
    match sdk.get_deposit_tx_payload(&param).await {
        Ok(payload) => println!("✓ Deposit tx: {}", payload.tx),
        Err(e) => println!("✗ Error: {}", e),
    }
}
