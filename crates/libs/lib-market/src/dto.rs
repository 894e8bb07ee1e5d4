//! # Wire Types
//!
//! JSON shapes of the remote API. The API wraps every payload in a `data`
//! envelope and names fields in camelCase; unknown fields are ignored so new
//! server fields never break decoding.

use serde::Deserialize;

/// Envelope for the coin list endpoint (`GET /assets`).
#[derive(Debug, Clone, Deserialize)]
pub struct CoinsResponseDto {
    pub data: Vec<CoinDto>,
}

/// One coin as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDto {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: i32,
    pub market_cap_usd: f64,
    pub price_usd: f64,
    #[serde(rename = "changePercent24Hr")]
    pub change_percent_24hr: f64,
}

/// Envelope for the price history endpoint (`GET /assets/{id}/history`).
#[derive(Debug, Clone, Deserialize)]
pub struct CoinHistoryDto {
    pub data: Vec<CoinPriceDto>,
}

/// One historical price point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPriceDto {
    pub price_usd: f64,
    /// Epoch milliseconds.
    pub time: i64,
}
