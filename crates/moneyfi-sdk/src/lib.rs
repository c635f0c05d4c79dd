/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public MoneyFi SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod chain;
pub mod config;
pub mod http;
pub mod network;
pub mod resolver;
pub mod sdk;
pub mod types;

// Re-export commonly used types from config
pub use config::{ChainSetting, MoneyFiConfig, WalletLookup};

// Re-export commonly used types from http
pub use http::{ApiClient, ClientConfig, MoneyFiError, QueryParams, Result};

pub use chain::{AptosViewClient, MockWalletProbe, WalletAccountProbe};
pub use network::{Network, NetworkConstants, chain_id};
pub use resolver::EndpointResolver;
pub use sdk::MoneyFi;

// Re-export all types
pub use types::*;
