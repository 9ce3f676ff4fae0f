use crate::coinex::client::{CoinexClient, MAX_PAGE_LIMIT};
use crate::coinex::types::{BalanceInfo, Deposit, Withdrawal};
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Signed balance, withdrawal and deposit endpoints.
///
/// `access_id` leads and `tonce` trails by construction in the client
/// glue; the signature covers the bag in insertion order. Every operation
/// key in this module sorts before `tonce`, so for these endpoints the
/// insertion-order canonical string happens to equal the sorted form as
/// well (not true of every signed endpoint).
impl<R: RestClient> CoinexClient<R> {
    /// Account balances per asset.
    pub async fn balances(&self) -> Result<HashMap<String, BalanceInfo>, ExchangeError> {
        let params = self.signed_bag()?;
        self.get_signed("/balance/info", params).await
    }

    /// Withdrawal history, optionally filtered by asset or a single
    /// withdrawal id. Paging `limit` is clamped to 100.
    pub async fn withdrawals(
        &self,
        coin_type: Option<&str>,
        coin_withdraw_id: Option<u64>,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Withdrawal>, ExchangeError> {
        let mut params = self.signed_bag()?;
        if let Some(coin_type) = coin_type {
            params.push("coin_type", coin_type);
        }
        if let Some(coin_withdraw_id) = coin_withdraw_id {
            params.push("coin_withdraw_id", coin_withdraw_id);
        }
        params.push("limit", limit.min(MAX_PAGE_LIMIT));
        params.push("page", page);
        self.get_signed("/balance/coin/withdraw", params).await
    }

    /// Submit a withdrawal. `actual_amount` is the amount that arrives
    /// on-chain, exclusive of the transaction fee.
    pub async fn submit_withdrawal(
        &self,
        coin_type: &str,
        coin_address: &str,
        actual_amount: Decimal,
    ) -> Result<Withdrawal, ExchangeError> {
        let params = self
            .signed_bag()?
            .with("actual_amount", actual_amount)
            .with("coin_address", coin_address)
            .with("coin_type", coin_type);
        self.post_signed("/balance/coin/withdraw", params).await
    }

    /// Cancel a pending withdrawal. Succeeds as `true`; the exchange
    /// returns no payload for this action.
    pub async fn cancel_withdrawal(&self, coin_withdraw_id: u64) -> Result<bool, ExchangeError> {
        let params = self.signed_bag()?.with("coin_withdraw_id", coin_withdraw_id);
        self.delete_signed_action("/balance/coin/withdraw", params)
            .await
    }

    /// Deposit history. Paging `limit` is clamped to 100.
    pub async fn deposits(
        &self,
        coin_type: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Deposit>, ExchangeError> {
        let mut params = self.signed_bag()?;
        if let Some(coin_type) = coin_type {
            params.push("coin_type", coin_type);
        }
        params.push("limit", limit.min(MAX_PAGE_LIMIT));
        params.push("page", page);
        self.get_signed("/balance/coin/deposit", params).await
    }
}
