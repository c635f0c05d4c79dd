/*
[INPUT]:  HTTP configuration (base URL, timeouts, client identity)
[OUTPUT]: Configured reqwest client ready for API calls, typed JSON decoding
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{MoneyFiError, QueryParams, Result};

/// Value of the `X-SDK` header
pub const SDK_TYPE: &str = "rust-sdk";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HEADER_SDK: &str = "x-sdk";
pub const HEADER_SDK_VERSION: &str = "x-sdk-version";
pub const HEADER_CLIENT_CODE: &str = "x-client-code";
pub const HEADER_API_KEY: &str = "x-api-key";

/// Placeholder printed instead of credentials in `Debug` output
pub(crate) const REDACTED: &str = "***REDACTED***";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(100),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP transport for the MoneyFi backend
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
    config: ClientConfig,
    client_code: Option<String>,
    api_key: Option<String>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .field("client_code", &self.client_code)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        Url::parse(base_url)?;
        let http_client = build_http_client(&config)?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
            client_code: None,
            api_key: None,
        })
    }

    /// Attach an integration code sent as `X-Client-Code`
    #[must_use]
    pub fn with_client_code(mut self, client_code: impl Into<String>) -> Self {
        self.client_code = Some(client_code.into());
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/{endpoint}`, plus `?query` when any parameter survived null filtering
    pub fn build_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            endpoint.trim_start_matches('/')
        ))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HEADER_SDK, HeaderValue::from_static(SDK_TYPE));
        headers.insert(HEADER_SDK_VERSION, HeaderValue::from_static(SDK_VERSION));
        if let Some(code) = &self.client_code {
            headers.insert(HEADER_CLIENT_CODE, header_value(HEADER_CLIENT_CODE, code)?);
        }
        if let Some(key) = &self.api_key {
            headers.insert(HEADER_API_KEY, header_value(HEADER_API_KEY, key)?);
        }
        Ok(headers)
    }

    /// Build request builder with SDK headers attached
    pub(crate) fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<RequestBuilder> {
        let url = self.build_url(endpoint, params)?;
        Ok(self.http_client.request(method, url).headers(self.headers()?))
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &QueryParams) -> Result<T> {
        let builder = self.request(Method::GET, endpoint, params)?;
        self.send_json(builder).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, params: &QueryParams, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self.request(Method::POST, endpoint, params)?;
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }
        self.send_json(builder).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        execute_json(builder, self.config.timeout).await
    }
}

pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| MoneyFiError::Config(format!("failed to create HTTP client: {err}")))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|err| MoneyFiError::Config(format!("invalid {name} header value: {err}")))
}

/// Send once under `timeout` and decode the JSON body.
///
/// On expiry the in-flight request future is dropped, so a late response
/// can never reach the caller.
pub(crate) async fn execute_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    timeout: Duration,
) -> Result<T> {
    let (client, request) = builder.build_split();
    let request = request?;
    let method = request.method().clone();
    let path = request.url().path().to_owned();
    let duration_ms = timeout.as_millis() as u64;
    let started = Instant::now();

    let exchange = async {
        let response = client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok::<_, reqwest::Error>((status, body))
    };

    let (status, body) = match tokio::time::timeout(timeout, exchange).await {
        Ok(Ok(parts)) => parts,
        Ok(Err(err)) if err.is_timeout() => {
            warn!(%method, %path, timeout_ms = duration_ms, "request timed out");
            return Err(MoneyFiError::Timeout { duration_ms });
        }
        Ok(Err(err)) => {
            warn!(%method, %path, error = %err, "request failed");
            return Err(MoneyFiError::Network(err));
        }
        Err(_) => {
            warn!(%method, %path, timeout_ms = duration_ms, "request timed out");
            return Err(MoneyFiError::Timeout { duration_ms });
        }
    };

    debug!(
        %method,
        %path,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );

    if !status.is_success() {
        let message = error_message(status, &body);
        warn!(%method, %path, status = status.as_u16(), %message, "api error");
        return Err(MoneyFiError::api_error(status, message));
    }

    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    // No-content responses decode as `null` so `()` targets succeed.
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Backend message when the body is JSON, else the status reason phrase
fn error_message(status: StatusCode, body: &[u8]) -> String {
    let status_text = || {
        status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_str().to_owned())
    };

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::String(message)) => message,
        Ok(Value::Object(fields)) => {
            let message = ["message", "error"]
                .iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_str))
                .map(str::to_owned);
            message.unwrap_or_else(|| Value::Object(fields).to_string())
        }
        Ok(Value::Null) | Err(_) => status_text(),
        Ok(other) => other.to_string(),
    }
}
