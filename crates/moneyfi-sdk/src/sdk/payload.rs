/*
[INPUT]:  Deposit/withdraw parameters with a target chain id
[OUTPUT]: Opaque transaction payloads for the caller's wallet to sign
[POS]:    SDK layer - transaction payload endpoints
[UPDATE]: When adding new payload kinds
*/

use tracing::instrument;

use crate::http::endpoints::{
    TX_PAYLOAD_DEPOSIT, TX_PAYLOAD_REFERRAL_REWARD_WITHDRAW, TX_PAYLOAD_WITHDRAW,
};
use crate::http::{QueryParams, Result};
use crate::sdk::MoneyFi;
use crate::types::requests::TxPayloadQuery;
use crate::types::{
    TxPayloadDepositParam, TxPayloadDepositResponse, TxPayloadParam,
    TxPayloadReferralRewardWithdrawParam, TxPayloadReferralRewardWithdrawResponse,
    TxPayloadResponse, TxPayloadWithdrawParam, TxPayloadWithdrawResponse,
};

impl MoneyFi {
    /// GET v1/sdk/tx-payload-deposit
    #[instrument(skip_all, fields(sender = %param.sender, chain_id = param.chain_id))]
    pub async fn get_deposit_tx_payload(
        &self,
        param: &TxPayloadDepositParam,
    ) -> Result<TxPayloadDepositResponse> {
        self.tx_payload(TX_PAYLOAD_DEPOSIT, param).await
    }

    /// GET v1/sdk/tx-payload-withdraw
    #[instrument(skip_all, fields(sender = %param.sender, chain_id = param.chain_id))]
    pub async fn get_withdraw_tx_payload(
        &self,
        param: &TxPayloadWithdrawParam,
    ) -> Result<TxPayloadWithdrawResponse> {
        self.tx_payload(TX_PAYLOAD_WITHDRAW, param).await
    }

    /// GET v1/sdk/tx-payload-referral-reward-withdraw
    #[instrument(skip_all, fields(sender = %param.sender, chain_id = param.chain_id))]
    pub async fn get_withdraw_referral_reward_tx_payload(
        &self,
        param: &TxPayloadReferralRewardWithdrawParam,
    ) -> Result<TxPayloadReferralRewardWithdrawResponse> {
        self.tx_payload(TX_PAYLOAD_REFERRAL_REWARD_WITHDRAW, param).await
    }

    // Unknown chains fail here, before any request is sent.
    async fn tx_payload(&self, endpoint: &str, param: &TxPayloadParam) -> Result<TxPayloadResponse> {
        let client_url = self.resolver.resolve_one(param.chain_id)?;
        let params = QueryParams::from_serialize(&TxPayloadQuery { param, client_url })?;
        self.api.get(endpoint, &params).await
    }
}
