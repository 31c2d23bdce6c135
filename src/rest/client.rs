//! Ionomy HTTP API client implementation.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, SystemTimestamp, TimestampProvider, sign_encoded_query};
use crate::error::IonomyError;
use crate::rest::endpoints::IONOMY_BASE_URL;

/// The Ionomy HTTP API client.
///
/// This client provides access to all Ionomy market-data, trading and
/// account endpoints. The exchange uses HTTP GET for every operation,
/// including order placement and withdrawals; parameters always travel
/// in the query string.
///
/// # Example
///
/// ```rust,no_run
/// use ionomy_api_client::rest::IonomyClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = IonomyClient::new();
///
///     let summaries = client.market_summaries().await?;
///     println!("Summaries: {summaries}");
///
///     Ok(())
/// }
/// ```
///
/// For authenticated endpoints, provide credentials:
///
/// ```rust,no_run
/// use ionomy_api_client::rest::IonomyClient;
/// use ionomy_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = IonomyClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.balances().await?;
///     println!("Balances: {balances}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct IonomyClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
}

impl IonomyClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`IonomyClient::builder()`] to configure credentials for
    /// authenticated endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> IonomyClientBuilder {
        IonomyClientBuilder::new()
    }

    /// Issue a GET request against `endpoint` and unwrap the envelope.
    ///
    /// This is the single choke point for every API call. When both an
    /// API key and secret are configured, a fresh timestamp is captured,
    /// the request URL is signed, and the `api-auth-time`,
    /// `api-auth-key` and `api-auth-token` headers are attached.
    /// Otherwise the request is dispatched unauthenticated with no auth
    /// headers at all.
    pub async fn request<T, P>(&self, endpoint: &str, params: &P) -> Result<T, IonomyError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| IonomyError::InvalidResponse(e.to_string()))?;
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query)
        };

        let mut request = self.http_client.get(&url);
        let mut authenticated = false;
        if let Some(provider) = &self.credentials {
            let creds = provider.get_credentials();
            if creds.is_configured() {
                let timestamp = self.timestamp_provider.unix_timestamp();
                let signature = sign_encoded_query(
                    creds.expose_secret(),
                    &self.base_url,
                    endpoint,
                    &query,
                    timestamp,
                )?;
                request = request
                    .header("api-auth-time", timestamp.to_string())
                    .header("api-auth-key", &creds.api_key)
                    .header("api-auth-token", signature);
                authenticated = true;
            }
        }
        tracing::debug!(endpoint, authenticated, "dispatching request");

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Parse a response envelope from the Ionomy API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, IonomyError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        // Ionomy reports failures inside the envelope, usually with
        // HTTP 200, so the body decides before the status code does.
        let parsed: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
            IonomyError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })?;

        if !parsed.success {
            return Err(IonomyError::Api(parsed.message.unwrap_or_default()));
        }

        parsed.data.ok_or_else(|| {
            if !status.is_success() {
                IonomyError::InvalidResponse(format!("HTTP {}: {}", status, body))
            } else {
                IonomyError::InvalidResponse("Response missing 'data' field".to_string())
            }
        })
    }
}

impl Default for IonomyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IonomyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IonomyClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`IonomyClient`].
pub struct IonomyClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    keep_alive: bool,
}

impl IonomyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: IONOMY_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            user_agent: None,
            keep_alive: true,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// Endpoint paths are appended verbatim, so the URL must end with a
    /// trailing slash.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enable or disable connection reuse on the underlying transport.
    ///
    /// Defaults to `true`. When disabled, idle connections are not
    /// pooled and every request opens a fresh connection.
    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Build the client.
    pub fn build(self) -> IonomyClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("ionomy-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("ionomy-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if !self.keep_alive {
            builder = builder.pool_max_idle_per_host(0);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemTimestamp));

        IonomyClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
        }
    }
}

impl Default for IonomyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal response wrapper for Ionomy API envelopes.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::de::Deserialize<'de>"))]
struct ApiResponse<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = IonomyClient::new();
        assert_eq!(client.base_url, IONOMY_BASE_URL);
        assert!(client.credentials.is_none());
    }

    #[test]
    fn test_debug_does_not_leak_credentials() {
        let credentials = Arc::new(crate::auth::StaticCredentials::new("key", "secret"));
        let client = IonomyClient::builder().credentials(credentials).build();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("has_credentials: true"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_envelope_deserialization() {
        let parsed: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"data":{"x":1}}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.unwrap(), serde_json::json!({"x":1}));

        let parsed: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":false,"message":"bad market"}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("bad market"));
        assert!(parsed.data.is_none());
    }
}
