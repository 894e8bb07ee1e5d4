//! # Result Chaining Helpers
//!
//! Extension methods for propagating `Result` values through call chains
//! without branching at every step.
//!
//! `std::result::Result` already is the sealed success/error union this
//! crate builds on — `map` short-circuits on `Err` and the compiler enforces
//! exhaustive matching. This module adds the side-effect peeks and the
//! payload-discarding conversion the rest of the workspace chains onto it:
//!
//! ```rust
//! use lib_net::{NetworkError, ResultExt};
//!
//! let result: Result<u32, NetworkError> = Ok(42);
//! result
//!     .on_success(|n| println!("got {n}"))
//!     .on_error(|e| eprintln!("failed: {e}"))
//!     .into_empty()
//!     .ok();
//! ```

/// A `Result` whose success carries no payload.
pub type EmptyResult<E> = Result<(), E>;

/// Chaining extensions for `Result`.
///
/// Handlers run exactly once each, in call order, and never alter the
/// underlying value — both peeks return the receiver unchanged.
pub trait ResultExt<T, E>: Sized {
    /// Invoke `action` with a reference to the payload if `Ok`, then return
    /// the original result for further chaining. No-op on `Err`.
    fn on_success(self, action: impl FnOnce(&T)) -> Self;

    /// Invoke `action` with a reference to the error if `Err`, then return
    /// the original result for further chaining. No-op on `Ok`.
    fn on_error(self, action: impl FnOnce(&E)) -> Self;

    /// Discard the success payload, preserving an error unchanged.
    fn into_empty(self) -> EmptyResult<E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Ok(data) = &self {
            action(data);
        }
        self
    }

    fn on_error(self, action: impl FnOnce(&E)) -> Self {
        if let Err(error) = &self {
            action(error);
        }
        self
    }

    fn into_empty(self) -> EmptyResult<E> {
        self.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_map_on_error_never_invokes_transform() {
        let mut calls = 0;
        let result: Result<i32, NetworkError> = Err(NetworkError::ServerError);

        let mapped = result.map(|n| {
            calls += 1;
            n * 2
        });

        assert_eq!(mapped, Err(NetworkError::ServerError));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_on_success_runs_once_and_preserves_payload() {
        let mut calls = 0;
        let result: Result<i32, NetworkError> = Ok(7);

        let chained = result
            .on_success(|n| {
                calls += 1;
                assert_eq!(*n, 7);
            })
            .on_error(|_| panic!("error handler must not run on Ok"));

        assert_eq!(chained, Ok(7));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_on_error_runs_once_and_preserves_error() {
        let mut calls = 0;
        let result: Result<i32, NetworkError> = Err(NetworkError::TooManyRequests);

        let chained = result
            .on_success(|_| panic!("success handler must not run on Err"))
            .on_error(|e| {
                calls += 1;
                assert_eq!(*e, NetworkError::TooManyRequests);
            });

        assert_eq!(chained, Err(NetworkError::TooManyRequests));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_chained_handlers_run_in_call_order() {
        let mut order = Vec::new();
        let result: Result<i32, NetworkError> = Ok(1);

        let _ = result
            .on_success(|_| order.push("first"))
            .on_success(|_| order.push("second"))
            .on_success(|_| order.push("third"));

        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_into_empty_discards_payload() {
        let result: Result<String, NetworkError> = Ok("payload".to_string());
        assert_eq!(result.into_empty(), Ok(()));
    }

    #[test]
    fn test_into_empty_preserves_error() {
        let result: Result<String, NetworkError> = Err(NetworkError::Serialization);
        assert_eq!(result.into_empty(), Err(NetworkError::Serialization));
    }
}
