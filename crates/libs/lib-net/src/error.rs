//! # Network Error Taxonomy
//!
//! Closed set of classifiable network failure kinds.
//!
//! Every reachable outcome of a network call terminates in exactly one of
//! these variants — [`Unknown`](NetworkError::Unknown) is the deliberate
//! catch-all that keeps the taxonomy total. The presentation layer only ever
//! sees these values, never a raw transport error.

use thiserror::Error;

/// Classified network failure.
///
/// Each variant maps to one fixed human-readable message via the `#[error]`
/// attribute, used directly for user-facing messaging.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// Transport could not reach the server (unresolved address, no route,
    /// connection refused).
    #[error("Couldn't reach the server, please check your internet connection")]
    NoInternet,

    /// The server answered 408 Request Timeout.
    #[error("The request timed out")]
    RequestTimeout,

    /// The server answered 429 Too Many Requests.
    #[error("You've been rate limited, please try again later")]
    TooManyRequests,

    /// The server answered with a 5xx status.
    #[error("Server error occurred, please try again later")]
    ServerError,

    /// The response body could not be decoded into the expected type.
    #[error("Couldn't parse the server response")]
    Serialization,

    /// Any failure not covered by the explicit rules.
    #[error("An unknown error occurred")]
    Unknown,
}

impl From<&reqwest::Error> for NetworkError {
    /// Classify a transport-level error.
    ///
    /// Only connect failures and body-decode failures get dedicated
    /// variants; everything else is `Unknown`. Non-2xx statuses are not
    /// handled here — a completed response goes through
    /// [`response_to_result`](crate::call::response_to_result) instead.
    fn from(err: &reqwest::Error) -> Self {
        if err.is_connect() {
            NetworkError::NoInternet
        } else if err.is_decode() {
            NetworkError::Serialization
        } else {
            NetworkError::Unknown
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        NetworkError::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_has_a_fixed_message() {
        assert_eq!(
            NetworkError::NoInternet.to_string(),
            "Couldn't reach the server, please check your internet connection"
        );
        assert_eq!(NetworkError::RequestTimeout.to_string(), "The request timed out");
        assert_eq!(
            NetworkError::TooManyRequests.to_string(),
            "You've been rate limited, please try again later"
        );
        assert_eq!(
            NetworkError::ServerError.to_string(),
            "Server error occurred, please try again later"
        );
        assert_eq!(
            NetworkError::Serialization.to_string(),
            "Couldn't parse the server response"
        );
        assert_eq!(NetworkError::Unknown.to_string(), "An unknown error occurred");
    }
}
