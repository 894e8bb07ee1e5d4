//! # Market Data
//!
//! Coin list and price history fetched from a CoinCap-style HTTP API.
//!
//! ## Module Structure
//!
//! ```text
//! lib-market/
//! ├── dto.rs      - Wire types (JSON envelope and payloads)
//! ├── coin.rs     - Domain models (Coin, CoinPrice)
//! ├── mappers.rs  - Wire-to-domain conversions
//! └── source.rs   - CoinDataSource trait + remote implementation
//! ```
//!
//! Callers receive `Result<_, NetworkError>` from the data source and never
//! observe a raw transport error; see `lib-net` for the classification rules.

pub mod coin;
pub mod dto;
pub mod mappers;
pub mod source;

pub use coin::{Coin, CoinPrice};
pub use source::{CoinDataSource, RemoteCoinDataSource};
