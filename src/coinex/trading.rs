use crate::coinex::client::{CoinexClient, MAX_PAGE_LIMIT};
use crate::coinex::types::{MiningDifficulty, Order, OrderDeal, Paged};
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::OrderSide;
use rust_decimal::Decimal;

/// Signed order endpoints.
impl<R: RestClient> CoinexClient<R> {
    /// Place a limit order.
    pub async fn place_limit_order(
        &self,
        market: &str,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Order, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self
            .signed_bag()?
            .with("amount", amount)
            .with("market", market)
            .with("price", price)
            .with("type", side);
        self.post_signed("/order/limit", params).await
    }

    /// Place a market order.
    pub async fn place_market_order(
        &self,
        market: &str,
        side: OrderSide,
        amount: Decimal,
    ) -> Result<Order, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self
            .signed_bag()?
            .with("amount", amount)
            .with("market", market)
            .with("type", side);
        self.post_signed("/order/market", params).await
    }

    /// Place an immediate-or-cancel order.
    pub async fn place_ioc_order(
        &self,
        market: &str,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Order, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self
            .signed_bag()?
            .with("amount", amount)
            .with("market", market)
            .with("price", price)
            .with("type", side);
        self.post_signed("/order/ioc", params).await
    }

    /// Unexecuted orders, paged. `limit` is clamped to 100.
    pub async fn pending_orders(
        &self,
        market: &str,
        page: u32,
        limit: u32,
    ) -> Result<Paged<Order>, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self
            .signed_bag()?
            .with("limit", limit.min(MAX_PAGE_LIMIT))
            .with("market", market)
            .with("page", page);
        self.get_signed("/order/pending", params).await
    }

    /// Fully executed or cancelled orders, paged. `limit` is clamped to 100.
    pub async fn finished_orders(
        &self,
        market: &str,
        page: u32,
        limit: u32,
    ) -> Result<Paged<Order>, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self
            .signed_bag()?
            .with("limit", limit.min(MAX_PAGE_LIMIT))
            .with("market", market)
            .with("page", page);
        self.get_signed("/order/finished", params).await
    }

    /// Status of a single order.
    pub async fn order_status(&self, market: &str, id: u64) -> Result<Order, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self.signed_bag()?.with("id", id).with("market", market);
        self.get_signed("/order/status", params).await
    }

    /// Cancel an unexecuted order. Returns the order in its state after
    /// cancellation.
    pub async fn cancel_order(&self, market: &str, id: u64) -> Result<Order, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self.signed_bag()?.with("id", id).with("market", market);
        self.delete_signed("/order/pending", params).await
    }

    /// Executions belonging to one order, paged. `limit` is clamped to 100.
    pub async fn order_deals(
        &self,
        id: u64,
        page: u32,
        limit: u32,
    ) -> Result<Paged<OrderDeal>, ExchangeError> {
        let params = self
            .signed_bag()?
            .with("id", id)
            .with("limit", limit.min(MAX_PAGE_LIMIT))
            .with("page", page);
        self.get_signed("/order/deals", params).await
    }

    /// The account's executions in one market, paged. `limit` is clamped
    /// to 100.
    pub async fn user_deals(
        &self,
        market: &str,
        page: u32,
        limit: u32,
    ) -> Result<Paged<OrderDeal>, ExchangeError> {
        Self::ensure_market(market)?;
        let params = self
            .signed_bag()?
            .with("limit", limit.min(MAX_PAGE_LIMIT))
            .with("market", market)
            .with("page", page);
        self.get_signed("/order/user/deals", params).await
    }

    /// Current trade-mining difficulty.
    pub async fn mining_difficulty(&self) -> Result<MiningDifficulty, ExchangeError> {
        let params = self.signed_bag()?;
        self.get_signed("/order/mining/difficulty", params).await
    }
}
