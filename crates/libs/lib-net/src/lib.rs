//! # Networking Core
//!
//! Typed HTTP result propagation for the CoinTracker workspace.
//!
//! Every network call in the workspace flows through this crate:
//!
//! ```text
//! data source ──> safe_call ──> reqwest ──> response_to_result ──> Result
//! ```
//!
//! ## Module Overview
//!
//! ```text
//! lib-net/
//! ├── error.rs   - NetworkError taxonomy (closed thiserror enum)
//! ├── result.rs  - ResultExt chaining helpers, EmptyResult alias
//! ├── url.rs     - construct_url base-URL resolution
//! ├── call.rs    - safe_call wrapper + response classifier
//! └── client.rs  - HttpClientFactory (shared reqwest::Client)
//! ```
//!
//! ## Error Handling
//!
//! Expected failure paths never surface as raw errors to callers: transport
//! failures and non-2xx responses are classified into [`NetworkError`] inside
//! [`safe_call`] and [`response_to_result`]. Cancellation is the one
//! exception — dropping an in-flight future cancels the request without ever
//! producing a `Result`, so task teardown stays control flow rather than
//! being misreported as an `Unknown` error.

pub mod call;
pub mod client;
pub mod error;
pub mod result;
pub mod url;

// Re-export commonly used types for convenience
pub use call::{response_to_result, safe_call};
pub use client::HttpClientFactory;
pub use error::NetworkError;
pub use result::{EmptyResult, ResultExt};
pub use url::construct_url;
