use serde::Deserialize;
use std::collections::HashMap;

// Wire shapes of the v1 API. Decimal quantities arrive as strings and are
// kept as strings; interpretation is the caller's concern.

#[derive(Debug, Clone, Deserialize)]
pub struct TickerData {
    pub last: String,
    pub buy: String,
    pub sell: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub vol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub date: u64,
    pub ticker: TickerData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TickerAll {
    pub date: u64,
    pub ticker: HashMap<String, TickerData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketDepth {
    pub asks: Vec<[String; 2]>,
    pub bids: Vec<[String; 2]>,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deal {
    pub id: u64,
    #[serde(rename = "type")]
    pub side: String,
    pub price: String,
    pub amount: String,
    pub date: u64,
    pub date_ms: u64,
}

/// One K-line row. The wire format is a positional array
/// `[time, open, close, high, low, volume, amount]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "KlineRow")]
pub struct Kline {
    pub time: i64,
    pub open: String,
    pub close: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    pub amount: String,
}

#[derive(Deserialize)]
struct KlineRow(i64, String, String, String, String, String, String);

impl From<KlineRow> for Kline {
    fn from(row: KlineRow) -> Self {
        Self {
            time: row.0,
            open: row.1,
            close: row.2,
            high: row.3,
            low: row.4,
            volume: row.5,
            amount: row.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketInfo {
    pub name: String,
    pub min_amount: String,
    pub maker_fee_rate: String,
    pub taker_fee_rate: String,
    pub pricing_name: String,
    pub pricing_decimal: u32,
    pub trading_name: String,
    pub trading_decimal: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    pub asset: String,
    pub can_deposit: bool,
    pub can_withdraw: bool,
    pub deposit_least_amount: String,
    pub withdraw_least_amount: String,
    pub withdraw_tx_fee: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceInfo {
    pub available: String,
    pub frozen: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Withdrawal {
    pub coin_withdraw_id: u64,
    pub coin_type: String,
    pub coin_address: String,
    pub amount: String,
    pub actual_amount: String,
    pub create_time: u64,
    pub status: String,
    pub tx_fee: String,
    #[serde(default)]
    pub tx_id: String,
    #[serde(default)]
    pub confirmations: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deposit {
    pub coin_deposit_id: u64,
    pub coin_type: String,
    pub coin_address: String,
    pub amount: String,
    pub create_time: u64,
    pub status: String,
    #[serde(default)]
    pub tx_id: String,
    #[serde(default)]
    pub confirmations: u32,
}

/// Paged list wrapper used by the order-history endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    pub count: u32,
    pub curr_page: u32,
    pub has_next: bool,
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: u64,
    pub market: String,
    #[serde(rename = "type")]
    pub side: String,
    pub order_type: String,
    pub amount: String,
    pub price: String,
    pub avg_price: String,
    pub deal_amount: String,
    pub deal_money: String,
    pub deal_fee: String,
    pub left: String,
    pub maker_fee_rate: String,
    pub taker_fee_rate: String,
    pub create_time: u64,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderDeal {
    pub id: u64,
    pub order_id: u64,
    #[serde(rename = "type")]
    pub side: String,
    pub price: String,
    pub amount: String,
    pub deal_money: String,
    pub fee: String,
    #[serde(default)]
    pub fee_asset: String,
    pub role: String,
    pub create_time: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MiningDifficulty {
    pub difficulty: String,
    pub prediction: String,
    pub update_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kline_decodes_from_positional_array() {
        let kline: Kline = serde_json::from_str(
            r#"[1572075600,"9200.00","9210.50","9220.00","9195.00","12.5","115000.0"]"#,
        )
        .unwrap();
        assert_eq!(kline.time, 1_572_075_600);
        assert_eq!(kline.open, "9200.00");
        assert_eq!(kline.amount, "115000.0");
    }

    #[test]
    fn order_maps_wire_type_field_to_side() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 42, "market": "BTCUSDT", "type": "buy", "order_type": "limit",
                "amount": "1.0", "price": "9000", "avg_price": "9000",
                "deal_amount": "1.0", "deal_money": "9000", "deal_fee": "9",
                "left": "0", "maker_fee_rate": "0.001", "taker_fee_rate": "0.001",
                "create_time": 1572075600, "status": "done"
            }"#,
        )
        .unwrap();
        assert_eq!(order.side, "buy");
        assert_eq!(order.order_type, "limit");
    }
}
