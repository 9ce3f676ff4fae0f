use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side in the exchange's wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candlestick period accepted by the K-line endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KlinePeriod {
    Minutes1,
    Minutes3,
    Minutes5,
    Minutes15,
    Minutes30,
    Hours1,
    Hours2,
    Hours4,
    Hours6,
    Hours12,
    Days1,
    Days3,
    Weeks1,
}

impl KlinePeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minutes1 => "1min",
            Self::Minutes3 => "3min",
            Self::Minutes5 => "5min",
            Self::Minutes15 => "15min",
            Self::Minutes30 => "30min",
            Self::Hours1 => "1hour",
            Self::Hours2 => "2hour",
            Self::Hours4 => "4hour",
            Self::Hours6 => "6hour",
            Self::Hours12 => "12hour",
            Self::Days1 => "1day",
            Self::Days3 => "3day",
            Self::Weeks1 => "1week",
        }
    }
}

impl fmt::Display for KlinePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
