/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TxnStatus;
use super::models::{QuoteItem, TokenInfo};

/// Opaque chain-specific transaction for the caller's wallet to sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPayloadResponse {
    pub tx: String,
}

pub type TxPayloadDepositResponse = TxPayloadResponse;
pub type TxPayloadWithdrawResponse = TxPayloadResponse;
pub type TxPayloadReferralRewardWithdrawResponse = TxPayloadResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawStatusResponse {
    #[serde(default)]
    pub status: Option<TxnStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedChains {
    pub evm: Vec<String>,
    pub aptos: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTokens {
    pub tokens: Vec<TokenInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetQuoteResponse {
    #[serde(default)]
    pub list_quote: Vec<QuoteItem>,
}
