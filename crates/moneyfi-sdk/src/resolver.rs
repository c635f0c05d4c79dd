/*
[INPUT]:  Configured chain settings and requested chain ids
[OUTPUT]: Resolved RPC/client URLs per chain id
[POS]:    Core layer - endpoint resolution ahead of chain-aware calls
[UPDATE]: When chain setting rules change
*/

use std::collections::HashMap;

use url::Url;

use crate::config::ChainSetting;
use crate::http::{MoneyFiError, Result};
use crate::types::ChainRpcUrl;

/// Pure lookup from chain id to configured client URL
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    urls: HashMap<i64, String>,
}

impl EndpointResolver {
    /// Build a resolver, rejecting empty lists, duplicate ids and malformed URLs.
    pub fn new(settings: &[ChainSetting]) -> Result<Self> {
        if settings.is_empty() {
            return Err(MoneyFiError::invalid_chain_setting(
                "at least one chain must be configured",
            ));
        }

        let mut urls = HashMap::with_capacity(settings.len());
        for setting in settings {
            let parsed = Url::parse(&setting.client_url).map_err(|err| {
                MoneyFiError::invalid_chain_setting(format!(
                    "chain {} has malformed client_url {:?}: {err}",
                    setting.chain_id, setting.client_url
                ))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(MoneyFiError::invalid_chain_setting(format!(
                    "chain {} client_url must be http(s)",
                    setting.chain_id
                )));
            }
            if urls
                .insert(setting.chain_id, setting.client_url.clone())
                .is_some()
            {
                return Err(MoneyFiError::invalid_chain_setting(format!(
                    "duplicate chain id {}",
                    setting.chain_id
                )));
            }
        }

        Ok(Self { urls })
    }

    pub fn resolve_one(&self, chain_id: i64) -> Result<&str> {
        self.urls
            .get(&chain_id)
            .map(String::as_str)
            .ok_or(MoneyFiError::UnknownChain { chain_id })
    }

    /// Resolve every id in input order; the first miss fails the whole batch.
    pub fn resolve_many(&self, chain_ids: &[i64]) -> Result<Vec<ChainRpcUrl>> {
        chain_ids
            .iter()
            .map(|&chain_id| {
                self.resolve_one(chain_id).map(|url| ChainRpcUrl {
                    chain_id,
                    client_url: url.to_string(),
                })
            })
            .collect()
    }
}
