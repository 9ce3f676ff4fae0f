use crate::coinex::client::{CoinexClient, MAX_KLINE_LIMIT, MAX_PAGE_LIMIT};
use crate::coinex::types::{
    AssetConfig, Deal, Kline, MarketDepth, MarketInfo, Ticker, TickerAll,
};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{QueryParams, RestClient};
use crate::core::types::KlinePeriod;
use std::collections::HashMap;

/// Public market-data endpoints. None of these require credentials and none
/// attach headers.
impl<R: RestClient> CoinexClient<R> {
    /// List all market names.
    pub async fn market_list(&self) -> Result<Vec<String>, ExchangeError> {
        self.get_public("/market/list", &QueryParams::new()).await
    }

    /// Trading rules and precision for every market.
    pub async fn market_info(&self) -> Result<HashMap<String, MarketInfo>, ExchangeError> {
        self.get_public("/market/info", &QueryParams::new()).await
    }

    /// 24h ticker for a single market.
    pub async fn ticker(&self, market: &str) -> Result<Ticker, ExchangeError> {
        Self::ensure_market(market)?;
        let params = QueryParams::new().with("market", market);
        self.get_public("/market/ticker", &params).await
    }

    /// 24h tickers for all markets.
    pub async fn ticker_all(&self) -> Result<TickerAll, ExchangeError> {
        self.get_public("/market/ticker/all", &QueryParams::new())
            .await
    }

    /// Order-book snapshot. `merge` is the price-merge depth as a decimal
    /// string (e.g. "0.01"); `limit` is clamped to the documented maximum.
    pub async fn depth(
        &self,
        market: &str,
        merge: &str,
        limit: u32,
    ) -> Result<MarketDepth, ExchangeError> {
        Self::ensure_market(market)?;
        let params = QueryParams::new()
            .with("market", market)
            .with("merge", merge)
            .with("limit", limit.min(MAX_PAGE_LIMIT));
        self.get_public("/market/depth", &params).await
    }

    /// Latest executed deals, optionally only those after `last_id`.
    pub async fn deals(
        &self,
        market: &str,
        last_id: Option<u64>,
    ) -> Result<Vec<Deal>, ExchangeError> {
        Self::ensure_market(market)?;
        let mut params = QueryParams::new().with("market", market);
        if let Some(last_id) = last_id {
            params.push("last_id", last_id);
        }
        self.get_public("/market/deals", &params).await
    }

    /// Candlesticks. `limit` is clamped to 1000 per the API contract.
    pub async fn kline(
        &self,
        market: &str,
        period: KlinePeriod,
        limit: u32,
    ) -> Result<Vec<Kline>, ExchangeError> {
        Self::ensure_market(market)?;
        let params = QueryParams::new()
            .with("market", market)
            .with("type", period)
            .with("limit", limit.min(MAX_KLINE_LIMIT));
        self.get_public("/market/kline", &params).await
    }

    /// Exchange-published currency conversion rates.
    pub async fn currency_rate(&self) -> Result<HashMap<String, String>, ExchangeError> {
        self.get_public("/common/currency/rate", &QueryParams::new())
            .await
    }

    /// Deposit/withdrawal configuration per asset, optionally filtered.
    pub async fn asset_config(
        &self,
        coin_type: Option<&str>,
    ) -> Result<HashMap<String, AssetConfig>, ExchangeError> {
        let mut params = QueryParams::new();
        if let Some(coin_type) = coin_type {
            params.push("coin_type", coin_type);
        }
        self.get_public("/common/asset/config", &params).await
    }
}
