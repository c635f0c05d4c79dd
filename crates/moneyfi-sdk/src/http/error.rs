/*
[INPUT]:  Error sources (configuration, resolver, HTTP, API, serialization)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the MoneyFi SDK
#[derive(Error, Debug)]
pub enum MoneyFiError {
    /// Invalid construction input
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested chain id has no configured RPC URL
    #[error("Invalid RPC: no client url configured for chain id {chain_id}")]
    UnknownChain { chain_id: i64 },

    /// Outbound call did not complete in time
    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Backend returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, connection refused, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Account address could not be encoded
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Response decoded but did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl MoneyFiError {
    /// Check if the error is worth retrying by the caller.
    ///
    /// The SDK never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            MoneyFiError::Timeout { .. } | MoneyFiError::Network(_) => true,
            MoneyFiError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, MoneyFiError::Timeout { .. })
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            MoneyFiError::Api { status, .. } => Some(*status),
            MoneyFiError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        MoneyFiError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_chain_setting(detail: impl std::fmt::Display) -> Self {
        MoneyFiError::Config(format!("Invalid chain setting: {detail}"))
    }
}

/// Result type alias for MoneyFi operations
pub type Result<T> = std::result::Result<T, MoneyFiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let timeout_err = MoneyFiError::Timeout { duration_ms: 100_000 };
        assert!(timeout_err.is_retryable());
        assert!(timeout_err.is_timeout());

        let unknown = MoneyFiError::UnknownChain { chain_id: 999 };
        assert!(!unknown.is_retryable());

        let server = MoneyFiError::api_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(server.is_retryable());

        let client = MoneyFiError::api_error(StatusCode::BAD_REQUEST, "bad token");
        assert!(!client.is_retryable());
    }

    #[test]
    fn test_api_error_creation() {
        let err = MoneyFiError::api_error(StatusCode::UNAUTHORIZED, "bad token");
        assert_eq!(err.status(), Some(401));
        match err {
            MoneyFiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "bad token");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_unknown_chain_mentions_id() {
        let err = MoneyFiError::UnknownChain { chain_id: 999 };
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn test_invalid_chain_setting_prefix() {
        let err = MoneyFiError::invalid_chain_setting("chains must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid chain setting: chains must not be empty"
        );
    }
}
