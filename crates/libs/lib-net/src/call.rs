//! # Safe Call Wrapper & Response Classifier
//!
//! Executes a transport round-trip and guarantees every outcome becomes a
//! typed `Result` — callers never see a raw transport error.
//!
//! The one thing that does pass through untouched is cancellation: dropping
//! the future returned by [`safe_call`] aborts the in-flight request and
//! discards any partially-received response without producing a `Result`,
//! so task teardown is never misreported as a data error.

use serde::de::DeserializeOwned;

use crate::error::NetworkError;

/// Classify a completed HTTP response into a typed `Result`.
///
/// - 200–299: decode the body as `T`; a decode failure is
///   [`NetworkError::Serialization`].
/// - 408 → `RequestTimeout`, 429 → `TooManyRequests`, 500–599 →
///   `ServerError`, anything else → `Unknown`.
pub async fn response_to_result<T>(response: reqwest::Response) -> Result<T, NetworkError>
where
    T: DeserializeOwned,
{
    match response.status().as_u16() {
        200..=299 => response
            .json::<T>()
            .await
            .map_err(|_| NetworkError::Serialization),
        408 => Err(NetworkError::RequestTimeout),
        429 => Err(NetworkError::TooManyRequests),
        500..=599 => Err(NetworkError::ServerError),
        _ => Err(NetworkError::Unknown),
    }
}

/// Execute a transport operation and classify its outcome.
///
/// `execute` is the in-flight request future (typically
/// `client.get(url).send()`). Transport errors are converted via
/// `From<reqwest::Error>`: connect failures become
/// [`NetworkError::NoInternet`], transport-level decode failures become
/// [`NetworkError::Serialization`], everything else is logged and reported
/// as [`NetworkError::Unknown`]. A completed response is handed to
/// [`response_to_result`].
pub async fn safe_call<T, F>(execute: F) -> Result<T, NetworkError>
where
    T: DeserializeOwned,
    F: std::future::Future<Output = reqwest::Result<reqwest::Response>>,
{
    let response = match execute.await {
        Ok(response) => response,
        Err(err) => {
            let classified = NetworkError::from(&err);
            if classified == NetworkError::Unknown {
                tracing::error!(error = %err, "Unclassified transport error");
            }
            return Err(classified);
        }
    };

    response_to_result(response).await
}
