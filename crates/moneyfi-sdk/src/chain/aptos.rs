/*
[INPUT]:  Aptos fullnode URL, account address, network constants
[OUTPUT]: Results of vault view functions called directly on the node
[POS]:    Chain layer - direct Aptos access (no backend involved)
[UPDATE]: When the vault module or node REST API changes
*/

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::chain::WalletAccountProbe;
use crate::http::client::{build_http_client, execute_json};
use crate::http::endpoints::APTOS_VIEW;
use crate::http::{ClientConfig, MoneyFiError, Result};
use crate::network::NetworkConstants;

const ADDRESS_HEX_LEN: usize = 64;

#[derive(Debug, Serialize)]
struct ViewRequest<'a> {
    function: &'a str,
    type_arguments: Vec<String>,
    arguments: Vec<Value>,
}

/// Calls MoneyFi vault view functions through a fullnode's `/view` route
#[derive(Debug, Clone)]
pub struct AptosViewClient {
    http_client: Client,
    config: ClientConfig,
    has_wallet_account_function: String,
}

impl AptosViewClient {
    pub fn new(config: ClientConfig, constants: &NetworkConstants) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(&config)?,
            config,
            has_wallet_account_function: constants.has_wallet_account_function(),
        })
    }

    /// Execute a view function and return its raw result list
    pub async fn view(&self, node_url: &str, function: &str, arguments: Vec<Value>) -> Result<Vec<Value>> {
        let url = format!("{}/{}", node_url.trim_end_matches('/'), APTOS_VIEW);
        let request = ViewRequest {
            function,
            type_arguments: Vec::new(),
            arguments,
        };
        debug!(%function, %node_url, "calling aptos view function");
        let builder = self.http_client.post(url).json(&request);
        execute_json(builder, self.config.timeout).await
    }
}

#[async_trait]
impl WalletAccountProbe for AptosViewClient {
    async fn has_wallet_account(&self, sender: &str, client_url: &str) -> Result<bool> {
        // The vault takes the account address as vector<u8>.
        let encoded = encode_account_address(sender)?;
        let result = self
            .view(client_url, &self.has_wallet_account_function, vec![Value::String(encoded)])
            .await?;

        result.first().and_then(Value::as_bool).ok_or_else(|| {
            MoneyFiError::InvalidResponse(format!(
                "has_wallet_account returned {}, expected [bool]",
                Value::Array(result.clone())
            ))
        })
    }
}

/// Normalize an Aptos account address into the `0x`-prefixed 32-byte hex form
pub fn encode_account_address(address: &str) -> Result<String> {
    let trimmed = address.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex_part.is_empty() || hex_part.len() > ADDRESS_HEX_LEN {
        return Err(MoneyFiError::InvalidAddress(address.to_string()));
    }

    let padded = format!("{:0>width$}", hex_part, width = ADDRESS_HEX_LEN);
    let bytes = hex::decode(&padded).map_err(|_| MoneyFiError::InvalidAddress(address.to_string()))?;
    Ok(format!("0x{}", hex::encode(bytes)))
}
