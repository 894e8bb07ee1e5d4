//! # HTTP Client Factory
//!
//! Builds the shared `reqwest::Client` used by every data source.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// Factory for the workspace-wide HTTP client.
///
/// The client is constructed once at startup and shared read-only across all
/// requests; reqwest handles connection pooling internally. No client-side
/// timeout is set here — abort policy belongs to whoever owns the transport.
pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Create a client that asks for JSON on every request.
    pub fn create() -> Client {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
