//! # Wire-to-Domain Mappers
//!
//! Field-for-field copies; the only real conversion is epoch millis to
//! `DateTime<Utc>` for history points.

use chrono::{DateTime, Utc};

use crate::coin::{Coin, CoinPrice};
use crate::dto::{CoinDto, CoinPriceDto};

impl From<CoinDto> for Coin {
    fn from(dto: CoinDto) -> Self {
        Coin {
            id: dto.id,
            name: dto.name,
            symbol: dto.symbol,
            rank: dto.rank,
            market_cap_usd: dto.market_cap_usd,
            price_usd: dto.price_usd,
            change_percent_24hr: dto.change_percent_24hr,
        }
    }
}

impl From<CoinPriceDto> for CoinPrice {
    fn from(dto: CoinPriceDto) -> Self {
        CoinPrice {
            price_usd: dto.price_usd,
            // Out-of-range millis clamp to the epoch rather than panicking.
            date_time: DateTime::<Utc>::from_timestamp_millis(dto.time).unwrap_or_default(),
        }
    }
}
