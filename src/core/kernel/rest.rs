use crate::core::errors::ExchangeError;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{instrument, trace};

/// HTTP transport boundary.
///
/// Implementations perform the network round trip and JSON decode, nothing
/// more: no signing, no envelope interpretation, no retries. The client
/// layer hands in fully built URLs and any signed headers. Failures are
/// either [`ExchangeError::NetworkError`] (connection/status) or
/// [`ExchangeError::DeserializationError`] (body shape).
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Perform a GET request and decode the response body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<T, ExchangeError>;

    /// Perform a POST request with a JSON body and decode the response.
    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &Value,
        headers: &HashMap<String, String>,
    ) -> Result<T, ExchangeError>;

    /// Perform a DELETE request and decode the response body.
    async fn delete_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<T, ExchangeError>;
}

/// Configuration for the reqwest-backed transport.
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string for unsigned requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(exchange_name: String) -> Self {
        Self {
            exchange_name,
            timeout_seconds: 30,
            user_agent: crate::core::kernel::signer::USER_AGENT.to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for the reqwest-backed transport.
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of [`RestClient`] using reqwest.
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    pub fn new(exchange_name: String) -> Result<Self, ExchangeError> {
        RestClientBuilder::new(RestClientConfig::new(exchange_name)).build()
    }

    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        if !status.is_success() {
            return Err(ExchangeError::NetworkError(format!(
                "HTTP {}: {}",
                status, response_text
            )));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            ExchangeError::DeserializationError(format!("Failed to parse JSON response: {}", e))
        })
    }

    #[instrument(skip(self, body, headers), fields(exchange = %self.config.exchange_name, method = %method, url = %url))]
    async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        headers: &HashMap<String, String>,
    ) -> Result<T, ExchangeError> {
        let mut request = self.client.request(method, url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<T, ExchangeError> {
        self.make_request(Method::GET, url, None, headers).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &Value,
        headers: &HashMap<String, String>,
    ) -> Result<T, ExchangeError> {
        self.make_request(Method::POST, url, Some(body), headers)
            .await
    }

    async fn delete_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<T, ExchangeError> {
        self.make_request(Method::DELETE, url, None, headers).await
    }
}
