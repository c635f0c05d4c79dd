/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::CrossChainAddress;
use super::models::{ChainRpcUrl, serde_helpers};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub user_address: CrossChainAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_partnership: Option<bool>,
}

impl CreateUserPayload {
    pub fn new(user_address: CrossChainAddress) -> Self {
        Self {
            user_address,
            ref_by: None,
            is_partnership: None,
        }
    }

    #[must_use]
    pub fn with_ref_by(mut self, ref_by: impl Into<String>) -> Self {
        self.ref_by = Some(ref_by.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInitializationWalletAccountParam {
    pub user_address: CrossChainAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasWalletAccountParam {
    pub sender: String,
}

/// Parameters shared by every transaction-payload endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPayloadParam {
    pub sender: String,
    pub chain_id: i64,
    pub token_address: String,
    /// Integer amount in the token's smallest unit
    #[serde(with = "serde_helpers::u128_string")]
    pub amount: u128,
}

pub type TxPayloadDepositParam = TxPayloadParam;
pub type TxPayloadWithdrawParam = TxPayloadParam;
pub type TxPayloadReferralRewardWithdrawParam = TxPayloadParam;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatisticParam {
    pub address: String,
    pub chain_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetQuoteParam {
    pub sender: String,
    pub to_chain_ids: Vec<i64>,
}

/// Signed off-chain withdraw intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqWithdrawPayload {
    pub signature: String,
    pub pubkey: String,
    pub message: String,
    pub to_chain_id: i64,
    pub from_chain_id: Vec<i64>,
}

// Wire envelopes: caller params augmented with SDK-resolved fields.

#[derive(Debug, Serialize)]
pub(crate) struct CreateUserRequest<'a> {
    #[serde(flatten)]
    pub payload: &'a CreateUserPayload,
    pub integration_code: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct WalletAccountRequest<'a> {
    pub user_address: &'a CrossChainAddress,
    pub client_url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct HasWalletAccountQuery<'a> {
    pub sender: &'a str,
    pub client_url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TxPayloadQuery<'a> {
    #[serde(flatten)]
    pub param: &'a TxPayloadParam,
    pub client_url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserStatisticQuery<'a> {
    pub address: &'a str,
    pub chain_ids: &'a [i64],
    pub client_urls: &'a [ChainRpcUrl],
}

#[derive(Debug, Serialize)]
pub(crate) struct QuoteQuery<'a> {
    pub sender: &'a str,
    pub to_chain_ids: &'a [i64],
    pub client_urls: &'a [ChainRpcUrl],
}

#[derive(Debug, Serialize)]
pub(crate) struct AddressQuery<'a> {
    pub address: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tx_payload_amount_serializes_as_string() {
        let param = TxPayloadParam {
            sender: "0xabc".to_string(),
            chain_id: -1,
            token_address: "0xusdc".to_string(),
            amount: 340_282_366_920_938_463_463_374_607_431_768_211_455,
        };
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["amount"], json!("340282366920938463463374607431768211455"));

        let back: TxPayloadParam = serde_json::from_value(value).unwrap();
        assert_eq!(back.amount, u128::MAX);
    }

    #[test]
    fn create_user_request_carries_integration_code() {
        let payload = CreateUserPayload::new(CrossChainAddress::Aptos("0xabc".into())).with_ref_by("REF1");
        let request = CreateUserRequest {
            payload: &payload,
            integration_code: "partner-01",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "user_address": { "Aptos": "0xabc" },
                "ref_by": "REF1",
                "integration_code": "partner-01"
            })
        );
    }
}
