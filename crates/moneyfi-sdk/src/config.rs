/*
[INPUT]:  Programmatic settings, YAML configuration file, environment overrides
[OUTPUT]: Validated SDK configuration
[POS]:    Configuration layer - SDK setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::client::REDACTED;
use crate::http::{MoneyFiError, Result};
use crate::network::Network;
use crate::resolver::EndpointResolver;

pub const DEFAULT_TIMEOUT_MS: u64 = 100_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_API_BASE_URL: &str = "MONEYFI_API_BASE_URL";
pub const ENV_API_TIMEOUT_MS: &str = "MONEYFI_API_TIMEOUT_MS";

/// RPC endpoint configured for one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSetting {
    pub chain_id: i64,
    pub client_url: String,
}

impl ChainSetting {
    pub fn new(chain_id: i64, client_url: impl Into<String>) -> Self {
        Self {
            chain_id,
            client_url: client_url.into(),
        }
    }
}

/// How `has_wallet_account` is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletLookup {
    /// Ask the MoneyFi backend
    #[default]
    Backend,
    /// Call the vault's view function on the configured Aptos node
    OnChain,
}

/// Top-level SDK configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFiConfig {
    /// RPC URLs forwarded to the backend for chain-aware calls
    pub chains: Vec<ChainSetting>,
    /// Integrator identifier sent as `X-Client-Code`
    pub integration_code: String,
    pub api_key: String,
    #[serde(default)]
    pub network: Network,
    /// Overrides the network's backend base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default)]
    pub wallet_lookup: WalletLookup,
}

impl fmt::Debug for MoneyFiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyFiConfig")
            .field("chains", &self.chains)
            .field("integration_code", &self.integration_code)
            .field("api_key", &REDACTED)
            .field("network", &self.network)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("wallet_lookup", &self.wallet_lookup)
            .finish()
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

impl MoneyFiConfig {
    pub fn new(
        chains: Vec<ChainSetting>,
        integration_code: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            chains,
            integration_code: integration_code.into(),
            api_key: api_key.into(),
            network: Network::default(),
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            wallet_lookup: WalletLookup::default(),
        }
    }

    #[must_use]
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_wallet_lookup(mut self, wallet_lookup: WalletLookup) -> Self {
        self.wallet_lookup = wallet_lookup;
        self
    }

    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            MoneyFiError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|err| MoneyFiError::Config(format!("invalid config yaml: {err}")))
    }

    /// Apply `MONEYFI_API_BASE_URL` / `MONEYFI_API_TIMEOUT_MS` when present
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(
            std::env::var(ENV_API_BASE_URL).ok(),
            std::env::var(ENV_API_TIMEOUT_MS).ok(),
        )
    }

    fn apply_overrides(mut self, base_url: Option<String>, timeout_ms: Option<String>) -> Result<Self> {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(raw) = timeout_ms {
            self.timeout_ms = raw.trim().parse().map_err(|err| {
                MoneyFiError::Config(format!("{ENV_API_TIMEOUT_MS} must be an integer: {err}"))
            })?;
        }
        Ok(self)
    }

    /// Eager validation run at SDK construction
    pub fn validate(&self) -> Result<()> {
        EndpointResolver::new(&self.chains)?;

        if self.integration_code.trim().is_empty() {
            return Err(MoneyFiError::Config(
                "integration_code must not be empty".to_string(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(MoneyFiError::Config("api_key must not be empty".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(MoneyFiError::Config("timeout_ms must be positive".to_string()));
        }
        if let Some(base_url) = &self.base_url {
            url::Url::parse(base_url).map_err(|err| {
                MoneyFiError::Config(format!("invalid base_url {base_url:?}: {err}"))
            })?;
        }
        Ok(())
    }

    /// Backend base URL: explicit override, else the network's constant
    pub fn api_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(self.network.constants().api_base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
