/*
[INPUT]:  MoneyFi config file path (argv[1]) or MONEYFI_* environment
[OUTPUT]: Supported chains and tokens printed to stdout
[POS]:    Examples - read-only catalogue queries
[UPDATE]: When catalogue endpoints change
*/

use moneyfi_sdk::*;
use tracing_subscriber::EnvFilter;

/// Example: list what the backend supports
///
/// Run with `RUST_LOG=moneyfi_sdk=debug` to see request tracing.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== MoneyFi Supported Assets Example ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => MoneyFiConfig::from_file(path),
        None => Ok(MoneyFiConfig::new(
            vec![ChainSetting::new(
                chain_id::APTOS,
                "https://fullnode.mainnet.aptoslabs.com/v1",
            )],
            "example-integrator",
            "example-key",
        )),
    }
    .and_then(MoneyFiConfig::apply_env_overrides);

    let sdk = match config.and_then(MoneyFi::new) {
        Ok(sdk) => sdk,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", sdk.api().base_url());

    match sdk.get_supported_chains().await {
        Ok(chains) => println!("✓ Chains: evm={:?} aptos={}", chains.evm, chains.aptos),
        Err(e) => println!("✗ Error: {}", e),
    }

    match sdk.get_supported_tokens().await {
        Ok(tokens) => {
            for token in tokens.tokens {
                println!(
                    "✓ {} on {} ({}, {} decimals)",
                    token.name, token.chain, token.address, token.token_decimals
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
