/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::{ChainRpcUrl, QuoteItem, TokenInfo, User, UserStatistic};
pub use requests::{
    CreateUserPayload, GetQuoteParam, HasWalletAccountParam, ReqWithdrawPayload,
    TxInitializationWalletAccountParam, TxPayloadDepositParam, TxPayloadParam,
    TxPayloadReferralRewardWithdrawParam, TxPayloadWithdrawParam, UserStatisticParam,
};
pub use responses::*;
