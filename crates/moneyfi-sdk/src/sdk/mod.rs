/*
[INPUT]:  Validated SDK configuration
[OUTPUT]: MoneyFi facade exposing one async method per backend operation
[POS]:    SDK layer - public entry point wiring resolver, transport and probes
[UPDATE]: When construction rules or shared facade state change
*/

use std::sync::Arc;

use tracing::info;

use crate::chain::{AptosViewClient, WalletAccountProbe};
use crate::config::{MoneyFiConfig, WalletLookup};
use crate::http::{ApiClient, ClientConfig, Result};
use crate::network::NetworkConstants;
use crate::resolver::EndpointResolver;
use crate::types::ChainRpcUrl;

mod account;
mod market;
mod payload;
mod withdraw;

/// Client for the MoneyFi cross-chain backend
///
/// Cheap to clone; clones share the underlying connection pool and the
/// read-only configuration.
#[derive(Debug, Clone)]
pub struct MoneyFi {
    config: Arc<MoneyFiConfig>,
    resolver: EndpointResolver,
    api: ApiClient,
    wallet_probe: Arc<dyn WalletAccountProbe>,
}

impl MoneyFi {
    /// Validate `config` and build the client. Fails with `Config` on invalid input.
    pub fn new(config: MoneyFiConfig) -> Result<Self> {
        config.validate()?;
        let resolver = EndpointResolver::new(&config.chains)?;

        let client_config = ClientConfig {
            timeout: config.timeout(),
            connect_timeout: config.connect_timeout(),
        };
        let api = ApiClient::with_config(config.api_base_url(), client_config.clone())?
            .with_client_code(config.integration_code.clone())
            .with_api_key(config.api_key.clone());

        let wallet_probe: Arc<dyn WalletAccountProbe> = match config.wallet_lookup {
            WalletLookup::Backend => Arc::new(api.clone()),
            WalletLookup::OnChain => Arc::new(AptosViewClient::new(
                client_config,
                config.network.constants(),
            )?),
        };

        info!(
            network = ?config.network,
            base_url = %api.base_url(),
            chains = config.chains.len(),
            wallet_lookup = ?config.wallet_lookup,
            "moneyfi client initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            resolver,
            api,
            wallet_probe,
        })
    }

    /// Replace the wallet-account lookup strategy
    #[must_use]
    pub fn with_wallet_probe(mut self, probe: Arc<dyn WalletAccountProbe>) -> Self {
        self.wallet_probe = probe;
        self
    }

    pub fn config(&self) -> &MoneyFiConfig {
        &self.config
    }

    pub fn constants(&self) -> &'static NetworkConstants {
        self.config.network.constants()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// Resolve configured RPC URLs for `chain_ids`, failing on the first unknown id
    pub fn get_urls_rpc_by_chain_ids(&self, chain_ids: &[i64]) -> Result<Vec<ChainRpcUrl>> {
        self.resolver.resolve_many(chain_ids)
    }
}
