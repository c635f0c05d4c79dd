/*
[INPUT]:  Sender address and the Aptos client URL
[OUTPUT]: Whether the sender already owns a MoneyFi wallet account
[POS]:    Chain layer - wallet-account lookup abstraction
[UPDATE]: When adding new lookup strategies
*/

use async_trait::async_trait;

use crate::http::endpoints::HAS_WALLET_ACCOUNT;
use crate::http::{ApiClient, QueryParams, Result};
use crate::types::requests::HasWalletAccountQuery;

/// Answers `has_wallet_account` for the facade
///
/// The backend and the on-chain view client both implement this, so the
/// facade keeps one method regardless of where the answer comes from.
#[async_trait]
pub trait WalletAccountProbe: Send + Sync + std::fmt::Debug {
    async fn has_wallet_account(&self, sender: &str, client_url: &str) -> Result<bool>;
}

#[async_trait]
impl WalletAccountProbe for ApiClient {
    async fn has_wallet_account(&self, sender: &str, client_url: &str) -> Result<bool> {
        let params = QueryParams::from_serialize(&HasWalletAccountQuery { sender, client_url })?;
        self.get(HAS_WALLET_ACCOUNT, &params).await
    }
}

/// Mock probe for testing
#[derive(Debug, Clone)]
pub struct MockWalletProbe {
    exists: bool,
}

impl MockWalletProbe {
    pub fn new(exists: bool) -> Self {
        Self { exists }
    }
}

#[async_trait]
impl WalletAccountProbe for MockWalletProbe {
    async fn has_wallet_account(&self, _sender: &str, _client_url: &str) -> Result<bool> {
        Ok(self.exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_mock_probe() {
        let probe = MockWalletProbe::new(true);
        assert!(probe.has_wallet_account("0xabc", "https://node.example").await.unwrap());
    }

    #[tokio::test]
    async fn test_backend_probe_queries_sender_and_client_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/sdk/has-wallet-account"))
            .and(query_param("sender", "0xabc"))
            .and(query_param("client_url", "https://node.example/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("false"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client init");
        let exists = client
            .has_wallet_account("0xabc", "https://node.example/v1")
            .await
            .expect("probe");
        assert!(!exists);
    }
}
