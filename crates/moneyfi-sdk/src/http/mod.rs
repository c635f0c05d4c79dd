/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod endpoints;
pub mod error;
pub mod query;

pub use error::{MoneyFiError, Result};
pub use query::QueryParams;

pub use client::{ApiClient, ClientConfig, SDK_TYPE, SDK_VERSION};
