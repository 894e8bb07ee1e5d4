//! # Coin Data Source
//!
//! Domain-level fetch operations built atop `lib-net`'s safe-call wrapper
//! and URL construction. Each call is a single fire-and-observe round trip:
//! no caching, retries, or pagination here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;

use lib_net::{construct_url, safe_call, NetworkError, ResultExt};

use crate::coin::{Coin, CoinPrice};
use crate::dto::{CoinHistoryDto, CoinsResponseDto};

/// Interval granularity requested from the history endpoint.
const HISTORY_INTERVAL: &str = "h6";

/// Fetch operations exposed to the presentation layer.
///
/// Behind a trait so consumers can inject a fake in tests.
#[async_trait]
pub trait CoinDataSource {
    /// Fetch the full coin list.
    async fn get_coins(&self) -> Result<Vec<Coin>, NetworkError>;

    /// Fetch a coin's price history between `start` and `end`.
    async fn get_coin_history(
        &self,
        coin_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CoinPrice>, NetworkError>;
}

/// Data source backed by the remote HTTP API.
///
/// Holds the shared `reqwest::Client` and the configured base URL; both are
/// read-only after construction, so concurrent calls share no mutable state.
pub struct RemoteCoinDataSource {
    client: Client,
    base_url: String,
}

impl RemoteCoinDataSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CoinDataSource for RemoteCoinDataSource {
    #[tracing::instrument(skip(self))]
    async fn get_coins(&self) -> Result<Vec<Coin>, NetworkError> {
        let started = std::time::Instant::now();
        let url = construct_url(&self.base_url, "/assets");

        tracing::debug!("Fetching coin list");

        let result: Result<CoinsResponseDto, NetworkError> =
            safe_call(self.client.get(&url).send()).await;

        result
            .map(|response| response.data.into_iter().map(Coin::from).collect::<Vec<_>>())
            .on_success(|coins| {
                tracing::debug!(
                    duration_ms = started.elapsed().as_millis(),
                    coin_count = coins.len(),
                    "Coin list fetched"
                );
            })
            .on_error(|error| {
                tracing::warn!(
                    duration_ms = started.elapsed().as_millis(),
                    %error,
                    "Coin list fetch failed"
                );
            })
    }

    #[tracing::instrument(skip(self, start, end), fields(coin_id = %coin_id))]
    async fn get_coin_history(
        &self,
        coin_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CoinPrice>, NetworkError> {
        let started = std::time::Instant::now();
        let url = construct_url(&self.base_url, &format!("/assets/{coin_id}/history"));

        tracing::debug!(
            start_ms = start.timestamp_millis(),
            end_ms = end.timestamp_millis(),
            "Fetching coin history"
        );

        let result: Result<CoinHistoryDto, NetworkError> = safe_call(
            self.client
                .get(&url)
                .query(&[
                    ("interval", HISTORY_INTERVAL.to_string()),
                    ("start", start.timestamp_millis().to_string()),
                    ("end", end.timestamp_millis().to_string()),
                ])
                .send(),
        )
        .await;

        result
            .map(|response| response.data.into_iter().map(CoinPrice::from).collect::<Vec<_>>())
            .on_success(|points| {
                tracing::debug!(
                    duration_ms = started.elapsed().as_millis(),
                    point_count = points.len(),
                    "Coin history fetched"
                );
            })
            .on_error(|error| {
                tracing::warn!(
                    duration_ms = started.elapsed().as_millis(),
                    %error,
                    "Coin history fetch failed"
                );
            })
    }
}
