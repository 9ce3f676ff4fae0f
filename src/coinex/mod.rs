pub mod account;
pub mod client;
pub mod market;
pub mod trading;
pub mod types;

pub use client::{CoinexClient, DEFAULT_BASE_URL, MAX_KLINE_LIMIT, MAX_PAGE_LIMIT};
pub use types::{
    AssetConfig, BalanceInfo, Deal, Deposit, Kline, MarketDepth, MarketInfo, MiningDifficulty,
    Order, OrderDeal, Paged, Ticker, TickerAll, TickerData, Withdrawal,
};
