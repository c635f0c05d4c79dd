/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnStatus {
    Done,
    Failed,
    Pending,
}

/// Address tagged with the chain family it belongs to.
///
/// Wire form: `{"Evm": "0x..."}` or `{"Aptos": "0x..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossChainAddress {
    Evm(String),
    Aptos(String),
}

impl CrossChainAddress {
    pub fn address(&self) -> &str {
        match self {
            CrossChainAddress::Evm(address) | CrossChainAddress::Aptos(address) => address,
        }
    }
}
