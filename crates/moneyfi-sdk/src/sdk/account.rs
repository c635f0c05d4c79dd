/*
[INPUT]:  User addresses, referral codes, wallet-account queries
[OUTPUT]: User records and wallet-account state
[POS]:    SDK layer - user registration and account endpoints
[UPDATE]: When adding new account endpoints or changing request shapes
*/

use tracing::instrument;

use crate::http::endpoints::{CREATE_USER, CREATE_WALLET_ACCOUNT, USER_INFORMATION};
use crate::http::{QueryParams, Result};
use crate::network::chain_id;
use crate::sdk::MoneyFi;
use crate::types::requests::{AddressQuery, CreateUserRequest, WalletAccountRequest};
use crate::types::{CreateUserPayload, HasWalletAccountParam, TxInitializationWalletAccountParam, User};

impl MoneyFi {
    /// Create (or fetch) the backend user for an address
    ///
    /// POST v1/sdk/create-user
    #[instrument(skip_all, fields(address = %payload.user_address.address()))]
    pub async fn create_user(&self, payload: &CreateUserPayload) -> Result<User> {
        let body = CreateUserRequest {
            payload,
            integration_code: &self.config.integration_code,
        };
        self.api.post(CREATE_USER, &QueryParams::new(), Some(&body)).await
    }

    /// GET v1/sdk/get-user-information?address={address}
    #[instrument(skip(self))]
    pub async fn get_user_information(&self, address: &str) -> Result<User> {
        let params = QueryParams::from_serialize(&AddressQuery { address })?;
        self.api.get(USER_INFORMATION, &params).await
    }

    /// Whether the sender already owns a MoneyFi wallet account on Aptos
    #[instrument(skip_all, fields(sender = %param.sender))]
    pub async fn has_wallet_account(&self, param: &HasWalletAccountParam) -> Result<bool> {
        let client_url = self.resolver.resolve_one(chain_id::APTOS)?;
        self.wallet_probe
            .has_wallet_account(&param.sender, client_url)
            .await
    }

    /// Transaction that initializes a wallet account, for the caller to sign
    ///
    /// POST v1/sdk/create-wallet-account
    #[instrument(skip_all, fields(address = %param.user_address.address()))]
    pub async fn get_tx_initialization_wallet_account(
        &self,
        param: &TxInitializationWalletAccountParam,
    ) -> Result<String> {
        let client_url = self.resolver.resolve_one(chain_id::APTOS)?;
        let body = WalletAccountRequest {
            user_address: &param.user_address,
            client_url,
        };
        self.api
            .post(CREATE_WALLET_ACCOUNT, &QueryParams::new(), Some(&body))
            .await
    }
}
