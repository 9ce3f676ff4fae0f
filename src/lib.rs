pub mod coinex;
pub mod core;

pub use crate::coinex::CoinexClient;
pub use crate::core::config::ExchangeConfig;
pub use crate::core::errors::ExchangeError;
pub use crate::core::types::{KlinePeriod, OrderSide};
