//! Try type - the captured outcome of a computation that may fault.
//!
//! A `Try<T, E>` is either `Value(value)` or `Error(fault)`. The type
//! parameter `E` is the *catchable set*: a fault of type `E` is captured as
//! data, anything else keeps propagating.
//!
//! Two ways of raising a fault are recognized:
//!
//! - returning `Err(e)` from a closure passed to [`Try::run`];
//! - panicking with an `E` payload (`std::panic::panic_any(e)`, or
//!   `std::panic::resume_unwind(Box::new(e))` to skip the panic hook) inside
//!   [`Try::catching`] or a [`Try::bind`] continuation.
//!
//! A panic whose payload is not an `E` is resumed unchanged.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Maybe, Try};
//!
//! let parsed: Try<i32, std::num::ParseIntError> = Try::run(|| "42".parse());
//! assert_eq!(parsed.to_maybe(), Maybe::some(42));
//!
//! let failed: Try<i32, std::num::ParseIntError> = Try::run(|| "x".parse());
//! assert!(failed.is_error());
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::result::Result as StdResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Maybe, Result};
use crate::typeclass::TypeConstructor;

/// The outcome of a computation that may raise a fault of type `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Try<T, E> {
    /// The computation returned normally.
    Value(T),
    /// The computation raised a fault from the catchable set.
    Error(E),
}

/// Runs `computation`, turning a panic with an `E` payload into `Error`.
fn capture<T, E, F>(computation: F) -> Try<T, E>
where
    E: Any + Send,
    F: FnOnce() -> Try<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(computation)) {
        Ok(outcome) => outcome,
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => Try::Error(*error),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

impl<T, E> Try<T, E> {
    /// Runs a computation that reports faults through `Err`.
    #[inline]
    pub fn run<F>(computation: F) -> Self
    where
        F: FnOnce() -> StdResult<T, E>,
    {
        computation().into()
    }

    /// Runs a computation that raises faults by panicking with an `E`
    /// payload.
    ///
    /// A fault raised with `std::panic::panic_any` still goes through the
    /// global panic hook, which by default prints a `panicked at` line to
    /// stderr. Raise with `std::panic::resume_unwind(Box::new(e))` instead to
    /// skip the hook; the fault is captured the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Try;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Overflow;
    ///
    /// let outcome: Try<u8, Overflow> = Try::catching(|| {
    ///     250_u8.checked_add(10).unwrap_or_else(|| std::panic::panic_any(Overflow))
    /// });
    /// assert_eq!(outcome, Try::Error(Overflow));
    /// ```
    pub fn catching<F>(computation: F) -> Self
    where
        E: Any + Send,
        F: FnOnce() -> T,
    {
        capture(|| Self::Value(computation()))
    }

    /// Returns `true` for `Value`.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` for `Error`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Alias for [`is_value`](Self::is_value).
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.is_value()
    }

    /// Alias for [`is_error`](Self::is_error).
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.is_error()
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Try<&T, &E> {
        match self {
            Self::Value(value) => Try::Value(value),
            Self::Error(error) => Try::Error(error),
        }
    }

    /// Runs `function` on a value, capturing any `E` it panics with.
    /// An `Error` is returned without invoking `function`.
    pub fn bind<U, F>(self, function: F) -> Try<U, E>
    where
        E: Any + Send,
        F: FnOnce(T) -> Try<U, E>,
    {
        match self {
            Self::Value(value) => capture(|| function(value)),
            Self::Error(error) => Try::Error(error),
        }
    }

    /// Maps the value.
    #[inline]
    pub fn fmap<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Try::Value(function(value)),
            Self::Error(error) => Try::Error(error),
        }
    }

    /// Maps the captured fault.
    #[inline]
    pub fn fmap_error<G, F>(self, function: F) -> Try<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Value(value) => Try::Value(value),
            Self::Error(error) => Try::Error(function(error)),
        }
    }

    /// Turns an `Error` into a `Value` computed from the fault.
    #[inline]
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Error(error) => Self::Value(function(error)),
        }
    }

    /// Returns `self` if it is a `Value`, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Value(_) => self,
            Self::Error(_) => alternative,
        }
    }

    /// Unwraps the value, falling back to `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Unwraps the value.
    ///
    /// # Panics
    ///
    /// Panics when called on an `Error`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Value(value) => value,
            Self::Error(error) => panic!("Try::unwrap called on Error({error:?})"),
        }
    }

    /// `Value(v)` becomes `Some(v)`, an `Error` becomes `None`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Value(value) => Maybe::Some(value),
            Self::Error(_) => Maybe::None,
        }
    }

    /// `Value(v)` becomes `Success(v)`, `Error(e)` becomes `Failure(e)`.
    #[inline]
    pub fn to_result(self) -> Result<T, E> {
        match self {
            Self::Value(value) => Result::Success(value),
            Self::Error(error) => Result::Failure(error),
        }
    }

    /// Converts into `std::result::Result`.
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }
}

impl<T, E> TypeConstructor for Try<T, E> {
    type Inner = T;
    type WithType<B> = Try<B, E>;
}

impl<T, E> From<StdResult<T, E>> for Try<T, E> {
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    fn from(value: Try<T, E>) -> Self {
        value.to_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "Value({value})"),
            Self::Error(error) => write!(formatter, "Error({error})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::panic_any;

    #[derive(Debug, Clone, PartialEq)]
    struct Timeout;

    #[rstest]
    fn catching_captures_declared_fault() {
        let outcome: Try<i32, Timeout> = Try::catching(|| panic_any(Timeout));
        assert_eq!(outcome, Try::Error(Timeout));
    }

    #[rstest]
    fn catching_captures_fault_raised_without_hook() {
        let outcome: Try<i32, Timeout> =
            Try::catching(|| std::panic::resume_unwind(Box::new(Timeout)));
        assert_eq!(outcome, Try::Error(Timeout));

        let chained: Try<i32, Timeout> =
            Try::Value(1).bind(|_| std::panic::resume_unwind(Box::new(Timeout)));
        assert_eq!(chained, Try::Error(Timeout));
    }

    #[rstest]
    #[should_panic(expected = "not a timeout")]
    fn catching_resumes_undeclared_fault() {
        let _: Try<i32, Timeout> = Try::catching(|| panic!("not a timeout"));
    }

    #[rstest]
    fn bind_captures_fault_from_continuation() {
        let outcome: Try<i32, Timeout> = Try::Value(1).bind(|_| panic_any(Timeout));
        assert_eq!(outcome, Try::Error(Timeout));
    }

    #[rstest]
    fn bind_on_error_is_noop() {
        let outcome: Try<i32, Timeout> =
            Try::<i32, Timeout>::Error(Timeout).bind(|_: i32| -> Try<i32, Timeout> { panic!("continuation ran") });
        assert_eq!(outcome, Try::Error(Timeout));
    }

    #[rstest]
    fn conversions_follow_variants() {
        assert_eq!(Try::<i32, &str>::Value(5).to_maybe(), Maybe::some(5));
        assert_eq!(Try::<i32, &str>::Error("e").to_result(), Result::failure("e"));
        assert_eq!(Try::<i32, &str>::Error("e").to_maybe(), Maybe::None);
    }

    #[rstest]
    fn recover_and_or() {
        let failed: Try<usize, &str> = Try::Error("four");
        assert_eq!(failed.recover(str::len), Try::Value(4));
        assert_eq!(failed.or(Try::Value(1)), Try::Value(1));
        assert_eq!(failed.value_or(9), 9);
    }

    #[rstest]
    fn rendering_follows_variant_form() {
        assert_eq!(Try::<i32, &str>::Value(5).to_string(), "Value(5)");
        assert_eq!(Try::<i32, &str>::Error("e").to_string(), "Error(e)");
    }
}
