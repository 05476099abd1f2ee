//! Result type - success or failure, each with a payload.
//!
//! `Result<T, E>` is either `Success(value)` or `Failure(error)`. It mirrors
//! [`Maybe`](super::Maybe) but keeps the reason for the failure. Combinators
//! only touch the success side unless their name says otherwise
//! (`fmap_failure`, `or_else`).
//!
//! The type deliberately shares its name with `std::result::Result`; the two
//! convert into each other with `From`, and `?`-style code can move between
//! them through [`into_std`](Result::into_std).
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Result;
//!
//! fn divide(numerator: i32, denominator: i32) -> Result<i32, String> {
//!     if denominator == 0 {
//!         Result::failure("division by zero".to_string())
//!     } else {
//!         Result::success(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(divide(10, 2).bind(|n| divide(n, 5)), Result::success(1));
//! assert_eq!(divide(1, 0).to_string(), "Failure(division by zero)");
//! ```

use std::fmt;
use std::result::Result as StdResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Maybe, Unit, Validated};
use crate::typeclass::TypeConstructor;

/// Success or failure.
///
/// Exactly one side is populated. Equality requires the same variant and an
/// equal payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Result<T, E> {
    /// The successful outcome.
    Success(T),
    /// The failed outcome.
    Failure(E),
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Construction and Predicates
    // =========================================================================

    /// Creates a `Success`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Monadic bind: runs `function` on a success payload; a `Failure` is
    /// passed through untouched.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Alias for [`bind`](Self::bind).
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.bind(function)
    }

    /// Maps the success payload.
    #[inline]
    pub fn fmap<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Maps the failure payload.
    #[inline]
    pub fn fmap_failure<G, F>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(function(error)),
        }
    }

    /// Maps whichever side is populated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Result;
    ///
    /// let failure: Result<i32, &str> = Result::failure("bad");
    /// assert_eq!(failure.bimap(|n| n + 1, str::len), Result::failure(3));
    /// ```
    #[inline]
    pub fn bimap<U, G, F, H>(self, success_function: F, failure_function: H) -> Result<U, G>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Result::Success(success_function(value)),
            Self::Failure(error) => Result::Failure(failure_function(error)),
        }
    }

    /// Eliminates the `Result` by applying one of two functions.
    #[inline]
    pub fn either<R, F, H>(self, success_function: F, failure_function: H) -> R
    where
        F: FnOnce(T) -> R,
        H: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    /// Swaps the two sides.
    #[inline]
    pub fn flip(self) -> Result<E, T> {
        match self {
            Self::Success(value) => Result::Failure(value),
            Self::Failure(error) => Result::Success(error),
        }
    }

    /// Replaces the success payload with [`Unit`].
    #[inline]
    pub fn discard(self) -> Result<Unit, E> {
        self.fmap(|_| Unit)
    }

    // =========================================================================
    // Alternatives and Extraction
    // =========================================================================

    /// Returns `self` if it is a `Success`, otherwise `alternative`.
    ///
    /// The alternative may carry a different error type.
    #[inline]
    pub fn or<G>(self, alternative: Result<T, G>) -> Result<T, G> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Recovers from a failure with a computed alternative.
    #[inline]
    pub fn or_else<G, F>(self, alternative: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => alternative(error),
        }
    }

    /// Unwraps the success payload, falling back to `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Unwraps the success payload, computing the fallback from the error.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => default(error),
        }
    }

    /// Unwraps the success payload.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("Result::unwrap called on Failure({error:?})"),
        }
    }

    /// Unwraps the failure payload.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => panic!("Result::unwrap_failure called on Success({value:?})"),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// `Success(v)` becomes `Some(v)`; a `Failure` becomes `None` and its
    /// error is discarded.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a single-error `Validated`.
    #[inline]
    pub fn to_validated(self) -> Validated<T, E> {
        match self {
            Self::Success(value) => Validated::Valid(value),
            Self::Failure(error) => Validated::invalid(error),
        }
    }

    /// Converts into `std::result::Result`, which makes the `?` operator
    /// available.
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<E> Result<Unit, E> {
    /// `Success(Unit)`.
    #[inline]
    pub const fn unit() -> Self {
        Self::Success(Unit)
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        self.bind(|inner| inner)
    }
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_on_failure_skips_continuation() {
        let failure: Result<i32, &str> = Result::failure("stop");
        let result = failure.bind(|_| -> Result<i32, &str> { panic!("continuation ran") });
        assert_eq!(result, Result::failure("stop"));
    }

    #[rstest]
    fn fmap_touches_only_success() {
        let success: Result<i32, &str> = Result::success(2);
        let failure: Result<i32, &str> = Result::failure("e");
        assert_eq!(success.fmap(|n| n * 3), Result::success(6));
        assert_eq!(failure.fmap(|n| n * 3), Result::failure("e"));
    }

    #[rstest]
    fn or_ignores_alternative_on_success() {
        let success: Result<i32, &str> = Result::success(1);
        assert_eq!(success.or(Result::<i32, u8>::failure(9)), Result::success(1));
        let failure: Result<i32, &str> = Result::failure("e");
        assert_eq!(failure.or(Result::<i32, u8>::success(2)), Result::success(2));
    }

    #[rstest]
    fn or_else_receives_error() {
        let failure: Result<i32, &str> = Result::failure("three");
        let recovered: Result<i32, ()> = failure.or_else(|error| Result::success(error.len() as i32));
        assert_eq!(recovered, Result::success(5));
    }

    #[rstest]
    #[case(Result::success(5), Maybe::some(5))]
    #[case(Result::failure("gone"), Maybe::None)]
    fn to_maybe_discards_error(#[case] result: Result<i32, &str>, #[case] expected: Maybe<i32>) {
        assert_eq!(result.to_maybe(), expected);
    }

    #[rstest]
    fn std_conversions() {
        let parsed: Result<i32, _> = "12".parse::<i32>().into();
        assert_eq!(parsed.fmap_failure(|e| e.to_string()), Result::success(12));
        let back: StdResult<i32, &str> = Result::failure("x").into();
        assert_eq!(back, Err("x"));
    }

    #[rstest]
    fn flip_and_either() {
        let success: Result<i32, &str> = Result::success(1);
        assert_eq!(success.flip(), Result::failure(1));
        let failure: Result<i32, &str> = Result::failure("ab");
        assert_eq!(failure.either(|n| n, |e| e.len() as i32), 2);
    }

    #[rstest]
    #[should_panic(expected = "Result::unwrap called on Failure(\"boom\")")]
    fn unwrap_failure_panics_with_payload() {
        let failure: Result<i32, &str> = Result::failure("boom");
        let _ = failure.unwrap();
    }

    #[rstest]
    fn rendering_follows_variant_form() {
        let success: Result<i32, &str> = Result::success(5);
        assert_eq!(success.to_string(), "Success(5)");
        assert_eq!(Result::<Unit, &str>::unit().to_string(), "Success()");
        assert_eq!(Result::<i32, &str>::failure("bad").to_string(), "Failure(bad)");
    }

    #[rstest]
    fn to_validated_wraps_single_error() {
        let failure: Result<i32, &str> = Result::failure("e");
        assert_eq!(failure.to_validated(), Validated::invalid("e"));
    }
}
