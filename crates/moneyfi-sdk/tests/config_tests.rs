/*
[INPUT]:  YAML configuration files on disk
[OUTPUT]: Test results for configuration loading and SDK construction
[POS]:    Integration tests - configuration
[UPDATE]: When configuration fields or validation rules change
*/

use std::io::Write;

use moneyfi_sdk::{MoneyFi, MoneyFiConfig, MoneyFiError, Network, WalletLookup};
use tempfile::NamedTempFile;
use tokio_test::assert_ok;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_config_file_and_build_sdk() {
    let file = write_config(
        r#"
chains:
  - chain_id: -1
    client_url: https://aptos-mainnet.example/v1
  - chain_id: 42161
    client_url: https://arb.example
integration_code: partner-01
api_key: key-123
network: staging
wallet_lookup: on_chain
"#,
    );

    let config = assert_ok!(MoneyFiConfig::from_file(file.path()));
    assert_eq!(config.network, Network::Staging);
    assert_eq!(config.wallet_lookup, WalletLookup::OnChain);

    let sdk = assert_ok!(MoneyFi::new(config));
    assert_eq!(sdk.api().base_url(), Network::Staging.constants().api_base_url);
    assert_eq!(
        sdk.resolver().resolve_one(42161).expect("arbitrum"),
        "https://arb.example"
    );
}

#[test]
fn test_duplicate_chain_rejected_at_construction() {
    let file = write_config(
        r#"
chains:
  - chain_id: 1
    client_url: https://a.example
  - chain_id: 1
    client_url: https://b.example
integration_code: partner-01
api_key: key-123
"#,
    );

    let config = assert_ok!(MoneyFiConfig::from_file(file.path()));
    let err = MoneyFi::new(config).unwrap_err();
    assert!(matches!(err, MoneyFiError::Config(ref msg) if msg.contains("duplicate chain id 1")));
}

#[test]
fn test_missing_file() {
    let err = MoneyFiConfig::from_file("/nonexistent/moneyfi.yaml").unwrap_err();
    assert!(matches!(err, MoneyFiError::Config(_)));
}
