//! Result family pinned to one kind of error.
//!
//! [`FixedError<K>`] builds [`Result`] values whose failure payload must
//! satisfy the predicate of the error kind `K`. The check happens when the
//! failure is constructed: a non-conforming payload is a contract violation,
//! not something that gets coerced.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{ErrorKind, FixedError, Result};
//!
//! struct HttpStatus;
//!
//! impl ErrorKind for HttpStatus {
//!     type Error = u16;
//!     const NAME: &'static str = "HttpStatus";
//!
//!     fn accepts(error: &u16) -> bool {
//!         (400..600).contains(error)
//!     }
//! }
//!
//! let not_found: Result<String, u16> = FixedError::<HttpStatus>::failure(404);
//! assert!(not_found.is_failure());
//!
//! let rejected = FixedError::<HttpStatus>::try_failure::<String>(200);
//! assert!(rejected.is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::Result;

/// A tag describing which failure payloads a [`FixedError`] family admits.
pub trait ErrorKind {
    /// The failure payload type.
    type Error;

    /// Human-readable name used in contract-violation messages.
    const NAME: &'static str;

    /// Returns `true` when `error` belongs to this kind.
    ///
    /// The default admits every value of [`Self::Error`], which makes the
    /// type parameter the only constraint.
    fn accepts(error: &Self::Error) -> bool {
        let _ = error;
        true
    }
}

/// Raised when a failure payload does not belong to the pinned error kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a failure of kind {kind}, got {rejected}")]
pub struct InvalidFailureType {
    /// Name of the pinned error kind.
    pub kind: &'static str,
    /// Debug rendering of the rejected payload.
    pub rejected: String,
}

/// Constructor family for `Result<T, K::Error>`.
///
/// Holds no data; it only carries the kind `K`.
pub struct FixedError<K> {
    kind: PhantomData<K>,
}

impl<K: ErrorKind> FixedError<K> {
    /// Wraps a success. Success payloads are not checked.
    #[inline]
    pub const fn success<T>(value: T) -> Result<T, K::Error> {
        Result::Success(value)
    }

    /// Wraps a failure after checking it against `K`.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidFailureType`] message when `K::accepts`
    /// rejects the payload.
    #[track_caller]
    pub fn failure<T>(error: K::Error) -> Result<T, K::Error>
    where
        K::Error: fmt::Debug,
    {
        match Self::try_failure(error) {
            Ok(result) => result,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Wraps a failure, returning the contract violation instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFailureType`] when `K::accepts` rejects the payload.
    pub fn try_failure<T>(
        error: K::Error,
    ) -> std::result::Result<Result<T, K::Error>, InvalidFailureType>
    where
        K::Error: fmt::Debug,
    {
        if K::accepts(&error) {
            Ok(Result::Failure(error))
        } else {
            Err(InvalidFailureType {
                kind: K::NAME,
                rejected: format!("{error:?}"),
            })
        }
    }
}

impl<K: ErrorKind> fmt::Debug for FixedError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "FixedError<{}>", K::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Negative;

    impl ErrorKind for Negative {
        type Error = i64;
        const NAME: &'static str = "Negative";

        fn accepts(error: &i64) -> bool {
            *error < 0
        }
    }

    struct AnyMessage;

    impl ErrorKind for AnyMessage {
        type Error = String;
        const NAME: &'static str = "AnyMessage";
    }

    #[rstest]
    fn conforming_failure_is_built() {
        let result: Result<u8, i64> = FixedError::<Negative>::failure(-1);
        assert_eq!(result, Result::failure(-1));
    }

    #[rstest]
    #[should_panic(expected = "expected a failure of kind Negative, got 3")]
    fn non_conforming_failure_panics() {
        let _: Result<u8, i64> = FixedError::<Negative>::failure(3);
    }

    #[rstest]
    fn try_failure_reports_violation() {
        let violation = FixedError::<Negative>::try_failure::<u8>(7).unwrap_err();
        assert_eq!(violation.kind, "Negative");
        assert_eq!(violation.rejected, "7");
    }

    #[rstest]
    fn default_predicate_accepts_everything() {
        let result: Result<(), String> = FixedError::<AnyMessage>::failure("x".to_string());
        assert!(result.is_failure());
        let success: Result<i32, String> = FixedError::<AnyMessage>::success(1);
        assert!(success.is_success());
    }

    #[rstest]
    fn debug_names_the_kind() {
        let family: FixedError<Negative> = FixedError { kind: PhantomData };
        assert_eq!(format!("{family:?}"), "FixedError<Negative>");
    }
}
