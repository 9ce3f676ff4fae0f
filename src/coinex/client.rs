use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{
    build_url, unwrap_action, unwrap_envelope, ApiEnvelope, CoinexSigner, QueryParams,
    ReqwestRest, RestClient, Signer,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.coinex.com/v1";

/// Documented maximum for the K-line `limit` parameter.
pub const MAX_KLINE_LIMIT: u32 = 1000;

/// Documented maximum for paging `limit` parameters.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Client for the exchange's REST API, generic over the HTTP transport.
///
/// State is the immutable credential pair plus the base URL; nothing is
/// mutated during a call, so a single instance can be shared across tasks
/// freely. Each operation is one awaited round trip with no retry logic.
pub struct CoinexClient<R: RestClient> {
    rest: R,
    config: ExchangeConfig,
    base_url: String,
    signer: Option<CoinexSigner>,
}

impl CoinexClient<ReqwestRest> {
    /// Create a client backed by the default reqwest transport.
    pub fn new(config: ExchangeConfig) -> Result<Self, ExchangeError> {
        let rest = ReqwestRest::new("coinex".to_string())?;
        Ok(Self::with_transport(rest, config))
    }
}

impl<R: RestClient> CoinexClient<R> {
    /// Create a client over a caller-supplied transport. Used by tests to
    /// substitute a stub for the network.
    pub fn with_transport(rest: R, config: ExchangeConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let signer = if config.has_credentials() {
            Some(CoinexSigner::new(config.secret_key().to_string()))
        } else {
            None
        };

        Self {
            rest,
            config,
            base_url,
            signer,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reject an empty market name before any network I/O.
    pub(crate) fn ensure_market(market: &str) -> Result<(), ExchangeError> {
        if market.is_empty() {
            return Err(ExchangeError::InvalidParameters(
                "market must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Current Unix time in milliseconds, computed fresh per signed call.
    pub(crate) fn tonce() -> Result<u64, ExchangeError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .map_err(|e| ExchangeError::Other(format!("Failed to get timestamp: {}", e)))
    }

    /// Start a signed parameter bag: `access_id` first, operation fields
    /// next, and `tonce` appended last by the dispatch helpers regardless
    /// of key names. The signature always covers this insertion order; it
    /// coincides with the lexicographically sorted form only when no
    /// operation key sorts after `tonce` (`type` on the order-placement
    /// endpoints does, for example).
    pub(crate) fn signed_bag(&self) -> Result<QueryParams, ExchangeError> {
        if self.signer.is_none() {
            return Err(ExchangeError::AuthenticationRequired(
                "API key and secret are required for this endpoint".to_string(),
            ));
        }
        Ok(QueryParams::new().with("access_id", self.config.api_key()))
    }

    pub(crate) fn finish_signed_bag(params: QueryParams) -> Result<QueryParams, ExchangeError> {
        Ok(params.with("tonce", Self::tonce()?))
    }

    fn signed_headers(&self, params: &QueryParams) -> Result<HashMap<String, String>, ExchangeError> {
        let signer = self.signer.as_ref().ok_or_else(|| {
            ExchangeError::AuthenticationRequired(
                "API key and secret are required for this endpoint".to_string(),
            )
        })?;
        signer.sign_request(&params.to_query_string())
    }

    /// JSON object form of a bag, used as the body of signed POST calls.
    /// Values stay strings, matching what the signature was computed over.
    fn body_from_bag(params: &QueryParams) -> Value {
        let map: serde_json::Map<String, Value> = params
            .pairs()
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }

    pub(crate) async fn get_public<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<T, ExchangeError> {
        let url = build_url(&self.base_url, endpoint, params);
        let envelope: ApiEnvelope<T> = self.rest.get_json(&url, &HashMap::new()).await?;
        unwrap_envelope(envelope)
    }

    pub(crate) async fn get_signed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<T, ExchangeError> {
        let params = Self::finish_signed_bag(params)?;
        let headers = self.signed_headers(&params)?;
        let url = build_url(&self.base_url, endpoint, &params);
        let envelope: ApiEnvelope<T> = self.rest.get_json(&url, &headers).await?;
        unwrap_envelope(envelope)
    }

    pub(crate) async fn post_signed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<T, ExchangeError> {
        let params = Self::finish_signed_bag(params)?;
        let headers = self.signed_headers(&params)?;
        let url = build_url(&self.base_url, endpoint, &QueryParams::new());
        let body = Self::body_from_bag(&params);
        let envelope: ApiEnvelope<T> = self.rest.post_json(&url, &body, &headers).await?;
        unwrap_envelope(envelope)
    }

    pub(crate) async fn delete_signed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<T, ExchangeError> {
        let params = Self::finish_signed_bag(params)?;
        let headers = self.signed_headers(&params)?;
        let url = build_url(&self.base_url, endpoint, &params);
        let envelope: ApiEnvelope<T> = self.rest.delete_json(&url, &headers).await?;
        unwrap_envelope(envelope)
    }

    /// DELETE variant for action endpoints whose `data` carries nothing;
    /// success is reported as `true` once the envelope code is zero.
    pub(crate) async fn delete_signed_action(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<bool, ExchangeError> {
        let params = Self::finish_signed_bag(params)?;
        let headers = self.signed_headers(&params)?;
        let url = build_url(&self.base_url, endpoint, &params);
        let envelope: ApiEnvelope<Value> = self.rest.delete_json(&url, &headers).await?;
        unwrap_action(envelope)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_bag_requires_credentials() {
        struct NeverRest;

        #[async_trait::async_trait]
        impl RestClient for NeverRest {
            async fn get_json<T: DeserializeOwned>(
                &self,
                _url: &str,
                _headers: &HashMap<String, String>,
            ) -> Result<T, ExchangeError> {
                panic!("transport must not be reached")
            }

            async fn post_json<T: DeserializeOwned>(
                &self,
                _url: &str,
                _body: &Value,
                _headers: &HashMap<String, String>,
            ) -> Result<T, ExchangeError> {
                panic!("transport must not be reached")
            }

            async fn delete_json<T: DeserializeOwned>(
                &self,
                _url: &str,
                _headers: &HashMap<String, String>,
            ) -> Result<T, ExchangeError> {
                panic!("transport must not be reached")
            }
        }

        let client = CoinexClient::with_transport(NeverRest, ExchangeConfig::read_only());
        assert!(matches!(
            client.signed_bag(),
            Err(ExchangeError::AuthenticationRequired(_))
        ));

        // a key without a secret is still unauthenticated
        let half = ExchangeConfig::new("K".to_string(), String::new());
        let client = CoinexClient::with_transport(NeverRest, half);
        assert!(matches!(
            client.signed_bag(),
            Err(ExchangeError::AuthenticationRequired(_))
        ));
    }

    #[test]
    fn tonce_is_epoch_milliseconds() {
        let tonce = CoinexClient::<ReqwestRest>::tonce().unwrap();
        // past 2020-01-01 and below 3000-01-01, i.e. milliseconds not seconds
        assert!(tonce > 1_577_836_800_000);
        assert!(tonce < 32_503_680_000_000);
    }
}
