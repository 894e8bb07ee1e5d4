//! # Domain Models

use chrono::{DateTime, Utc};

/// A listed cryptocurrency.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: i32,
    pub market_cap_usd: f64,
    pub price_usd: f64,
    pub change_percent_24hr: f64,
}

/// A single point of a coin's price history.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinPrice {
    pub price_usd: f64,
    pub date_time: DateTime<Utc>,
}
