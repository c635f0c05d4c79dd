/*
[INPUT]:  MoneyFi backend routing table
[OUTPUT]: Endpoint path constants relative to the API base URL
[POS]:    HTTP layer - endpoint registry
[UPDATE]: When the backend adds or renames SDK routes
*/

pub const CREATE_USER: &str = "v1/sdk/create-user";
pub const CREATE_WALLET_ACCOUNT: &str = "v1/sdk/create-wallet-account";
pub const HAS_WALLET_ACCOUNT: &str = "v1/sdk/has-wallet-account";
pub const TX_PAYLOAD_DEPOSIT: &str = "v1/sdk/tx-payload-deposit";
pub const TX_PAYLOAD_WITHDRAW: &str = "v1/sdk/tx-payload-withdraw";
pub const TX_PAYLOAD_REFERRAL_REWARD_WITHDRAW: &str = "v1/sdk/tx-payload-referral-reward-withdraw";
pub const USER_STATISTIC: &str = "v1/sdk/user-statistic";
pub const REQ_WITHDRAW: &str = "v1/sdk/req-withdraw";
pub const REQ_WITHDRAW_STATUS: &str = "v1/sdk/req-withdraw-status";
pub const SUPPORTED_CHAINS: &str = "v1/sdk/get-supported-chains";
pub const SUPPORTED_TOKENS: &str = "v1/sdk/get-supported-tokens";
pub const USER_INFORMATION: &str = "v1/sdk/get-user-information";
pub const MAX_QUOTES: &str = "v1/sdk/get-max-quotes";

/// Aptos fullnode view-function route, relative to the node URL
pub const APTOS_VIEW: &str = "view";
