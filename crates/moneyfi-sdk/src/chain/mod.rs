/*
[INPUT]:  Wallet addresses and Aptos node URLs
[OUTPUT]: Wallet-account existence answers from backend or chain
[POS]:    Chain layer - alternative lookup strategies behind the facade
[UPDATE]: When adding direct chain calls or new lookup strategies
*/

pub mod aptos;
pub mod probe;

pub use aptos::{AptosViewClient, encode_account_address};
pub use probe::{MockWalletProbe, WalletAccountProbe};
