/*
[INPUT]:  Chain id lists, sender/user addresses
[OUTPUT]: Supported chains/tokens, user statistics, max quotes
[POS]:    SDK layer - read-only catalogue and aggregate endpoints
[UPDATE]: When adding new catalogue endpoints or changing query parameters
*/

use tracing::instrument;

use crate::http::endpoints::{MAX_QUOTES, SUPPORTED_CHAINS, SUPPORTED_TOKENS, USER_STATISTIC};
use crate::http::{QueryParams, Result};
use crate::sdk::MoneyFi;
use crate::types::requests::{QuoteQuery, UserStatisticQuery};
use crate::types::{GetQuoteParam, GetQuoteResponse, SupportedChains, SupportedTokens, UserStatistic, UserStatisticParam};

impl MoneyFi {
    /// GET v1/sdk/get-supported-chains
    #[instrument(skip(self))]
    pub async fn get_supported_chains(&self) -> Result<SupportedChains> {
        self.api.get(SUPPORTED_CHAINS, &QueryParams::new()).await
    }

    /// GET v1/sdk/get-supported-tokens
    #[instrument(skip(self))]
    pub async fn get_supported_tokens(&self) -> Result<SupportedTokens> {
        self.api.get(SUPPORTED_TOKENS, &QueryParams::new()).await
    }

    /// Aggregated statistics across `param.chain_ids`
    ///
    /// GET v1/sdk/user-statistic
    #[instrument(skip_all, fields(address = %param.address, chains = param.chain_ids.len()))]
    pub async fn get_user_statistic(&self, param: &UserStatisticParam) -> Result<UserStatistic> {
        let client_urls = self.resolver.resolve_many(&param.chain_ids)?;
        let params = QueryParams::from_serialize(&UserStatisticQuery {
            address: &param.address,
            chain_ids: &param.chain_ids,
            client_urls: &client_urls,
        })?;
        self.api.get(USER_STATISTIC, &params).await
    }

    /// Maximum withdrawable amount per destination chain
    ///
    /// GET v1/sdk/get-max-quotes
    #[instrument(skip_all, fields(sender = %param.sender, chains = param.to_chain_ids.len()))]
    pub async fn get_max_quotes_amount(&self, param: &GetQuoteParam) -> Result<GetQuoteResponse> {
        let client_urls = self.resolver.resolve_many(&param.to_chain_ids)?;
        let params = QueryParams::from_serialize(&QuoteQuery {
            sender: &param.sender,
            to_chain_ids: &param.to_chain_ids,
            client_urls: &client_urls,
        })?;
        self.api.get(MAX_QUOTES, &params).await
    }
}
