/*
[INPUT]:  Network tag selected in configuration
[OUTPUT]: Immutable per-network constant table (API base, Aptos vault, USDC)
[POS]:    Configuration layer - deployment constants
[UPDATE]: When contracts are redeployed or a new network is added
*/

use serde::{Deserialize, Serialize};

/// Well-known logical chain ids
pub mod chain_id {
    /// Aptos is addressed with a fixed negative id so it never collides with EVM ids
    pub const APTOS: i64 = -1;
    pub const ETHEREUM: i64 = 1;
    pub const BSC: i64 = 56;
    pub const POLYGON: i64 = 137;
    pub const BASE: i64 = 8453;
    pub const ARBITRUM: i64 = 42161;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Staging,
}

/// Deployment constants for one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConstants {
    pub api_base_url: &'static str,
    pub aptos_vault_address: &'static str,
    pub aptos_usdc: &'static str,
}

const APTOS_VAULT: &str = "0xfd69465f1a84bda78f8c6c0ff0123ebbfe0cd9d80fecc2350e8fbb71576aeab6";
const APTOS_USDC: &str = "0xbae207659db88bea0cbead6da0ed00aac12edcdda169e591cd41c94180b46f3b";

static MAINNET: NetworkConstants = NetworkConstants {
    api_base_url: "https://api.moneyfi.fund",
    aptos_vault_address: APTOS_VAULT,
    aptos_usdc: APTOS_USDC,
};

// Staging shares the Aptos deployment and only swaps the backend.
static STAGING: NetworkConstants = NetworkConstants {
    api_base_url: "https://staging-api.moneyfi.fund",
    aptos_vault_address: APTOS_VAULT,
    aptos_usdc: APTOS_USDC,
};

impl Network {
    pub fn constants(self) -> &'static NetworkConstants {
        match self {
            Network::Mainnet => &MAINNET,
            Network::Staging => &STAGING,
        }
    }
}

impl NetworkConstants {
    /// `<vault>::wallet_account::has_wallet_account`
    pub fn has_wallet_account_function(&self) -> String {
        format!("{}::wallet_account::has_wallet_account", self.aptos_vault_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_ids_use_vault_address() {
        let constants = Network::Mainnet.constants();
        assert_eq!(
            constants.has_wallet_account_function(),
            format!("{APTOS_VAULT}::wallet_account::has_wallet_account")
        );
    }

    #[test]
    fn test_networks_select_distinct_backends() {
        assert_ne!(
            Network::Mainnet.constants().api_base_url,
            Network::Staging.constants().api_base_url
        );
        assert_eq!(
            Network::Mainnet.constants().aptos_usdc,
            Network::Staging.constants().aptos_usdc
        );
    }

    #[test]
    fn test_network_serde_lowercase() {
        let parsed: Network = serde_json::from_str("\"staging\"").expect("parse network");
        assert_eq!(parsed, Network::Staging);
        assert_eq!(Network::default(), Network::Mainnet);
    }
}
