/*
[INPUT]:  Signed withdraw intents and user addresses
[OUTPUT]: Withdraw submission acknowledgement and status
[POS]:    SDK layer - off-chain withdraw request endpoints
[UPDATE]: When withdraw flow or status values change
*/

use tracing::instrument;

use crate::http::endpoints::{REQ_WITHDRAW, REQ_WITHDRAW_STATUS};
use crate::http::{QueryParams, Result};
use crate::sdk::MoneyFi;
use crate::types::requests::AddressQuery;
use crate::types::{ReqWithdrawPayload, WithdrawStatusResponse};

impl MoneyFi {
    /// Submit a signed withdraw intent
    ///
    /// POST v1/sdk/req-withdraw?address={address}
    #[instrument(skip(self, payload), fields(to_chain_id = payload.to_chain_id))]
    pub async fn req_withdraw(&self, address: &str, payload: &ReqWithdrawPayload) -> Result<()> {
        let params = QueryParams::from_serialize(&AddressQuery { address })?;
        self.api.post(REQ_WITHDRAW, &params, Some(payload)).await
    }

    /// GET v1/sdk/req-withdraw-status?address={address}
    #[instrument(skip(self))]
    pub async fn get_withdraw_status(&self, address: &str) -> Result<WithdrawStatusResponse> {
        let params = QueryParams::from_serialize(&AddressQuery { address })?;
        self.api.get(REQ_WITHDRAW_STATUS, &params).await
    }
}
