//! # Tracker CLI
//!
//! Thin consumer of the market data stack: prints the coin list and the
//! top-ranked coin's recent price history.

mod config;

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

use lib_market::{CoinDataSource, RemoteCoinDataSource};
use lib_net::{HttpClientFactory, ResultExt};

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    tracing::info!(base_url = %config.api_base_url, "Starting tracker");

    let source = RemoteCoinDataSource::new(HttpClientFactory::create(), config.api_base_url);

    let coins = source
        .get_coins()
        .await
        .on_error(|error| tracing::error!(%error, "Coin list fetch failed"))
        .map_err(|error| anyhow::anyhow!("failed to fetch coins: {error}"))?;

    println!("{:<6} {:<10} {:<20} {:>14} {:>10}", "RANK", "SYMBOL", "NAME", "PRICE (USD)", "24H %");
    for coin in coins.iter().take(10) {
        println!(
            "{:<6} {:<10} {:<20} {:>14.2} {:>9.2}%",
            coin.rank, coin.symbol, coin.name, coin.price_usd, coin.change_percent_24hr
        );
    }

    if let Some(top) = coins.first() {
        let end = Utc::now();
        let start = end - Duration::days(7);

        source
            .get_coin_history(&top.id, start, end)
            .await
            .on_success(|history| {
                println!("\n{} — last 7 days ({} points):", top.name, history.len());
                for point in history {
                    println!("  {}  {:>12.2}", point.date_time.format("%Y-%m-%d %H:%M"), point.price_usd);
                }
            })
            .on_error(|error| tracing::error!(%error, coin_id = %top.id, "History fetch failed"))
            .into_empty()
            .map_err(|error| anyhow::anyhow!("failed to fetch history: {error}"))?;
    }

    Ok(())
}
