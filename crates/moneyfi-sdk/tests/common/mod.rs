/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for moneyfi-sdk tests

use moneyfi_sdk::{ChainSetting, MoneyFi, MoneyFiConfig, chain_id};
use wiremock::MockServer;

pub const APTOS_RPC: &str = "https://aptos-mainnet.example/v1";
pub const ETH_RPC: &str = "https://eth.example";
pub const BASE_RPC: &str = "https://base.example";
pub const INTEGRATION_CODE: &str = "partner-01";
pub const API_KEY: &str = "key-123";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_config(server: &MockServer) -> MoneyFiConfig {
    MoneyFiConfig::new(
        vec![
            ChainSetting::new(chain_id::APTOS, APTOS_RPC),
            ChainSetting::new(chain_id::ETHEREUM, ETH_RPC),
            ChainSetting::new(chain_id::BASE, BASE_RPC),
        ],
        INTEGRATION_CODE,
        API_KEY,
    )
    .with_base_url(server.uri())
}

/// SDK pointed at the mock server
pub fn test_sdk(server: &MockServer) -> MoneyFi {
    MoneyFi::new(test_config(server)).expect("sdk init")
}
