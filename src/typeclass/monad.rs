//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where the result of one
//! computation decides which computation runs next. For the failure-carrying
//! containers this is where short-circuiting lives: a `Failure`, `None` or
//! `Error` never invokes the continuation.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::lift(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Maybe::some("42").flat_map(parse_positive).flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Maybe, Result, Try};
#[cfg(feature = "control")]
use std::any::Any;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell this is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// A failing `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

#[cfg(feature = "control")]
impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

#[cfg(feature = "control")]
impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.bind(function)
    }
}

#[cfg(feature = "control")]
impl<T, E: Any + Send> Monad for Try<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        self.bind(function)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use rstest::rstest;

    fn halve(n: i32) -> Result<i32, String> {
        if n % 2 == 0 {
            Result::success(n / 2)
        } else {
            Result::failure(format!("{n} is odd"))
        }
    }

    fn decrement(n: i32) -> Result<i32, String> {
        if n > 0 {
            Result::success(n - 1)
        } else {
            Result::failure("negative".to_string())
        }
    }

    #[rstest]
    fn maybe_then_propagates_none() {
        assert_eq!(Maybe::<i32>::None.then(Maybe::some("next")), Maybe::None);
        assert_eq!(Maybe::some(1).then(Maybe::some("next")), Maybe::some("next"));
    }

    /// Left identity: pure(a).flat_map(f) == f(a)
    #[rstest]
    #[case(8)]
    #[case(7)]
    fn result_left_identity_law(#[case] value: i32) {
        let left = <Result<(), String>>::pure(value).flat_map(halve);
        assert_eq!(left, halve(value));
    }

    /// Right identity: m.flat_map(pure) == m
    #[rstest]
    fn result_right_identity_law() {
        let success: Result<i32, String> = Result::success(4);
        assert_eq!(success.clone().flat_map(Result::success), success);
    }

    /// Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[rstest]
    #[case(Result::success(8))]
    #[case(Result::success(2))]
    #[case(Result::success(3))]
    #[case(Result::failure("initial".to_string()))]
    fn result_associativity_law(#[case] start: Result<i32, String>) {
        let left = start.clone().flat_map(halve).flat_map(decrement);
        let right = start.flat_map(|x| halve(x).flat_map(decrement));
        assert_eq!(left, right);
    }

    #[rstest]
    fn try_flat_map_short_circuits_on_error() {
        let failed: Try<i32, String> = Try::Error("first".to_string());
        let result = failed.flat_map(|n| Try::Value(n + 1));
        assert_eq!(result, Try::Error("first".to_string()));
    }

    #[rstest]
    fn identity_flat_map_transforms() {
        assert_eq!(Identity(2).flat_map(|n| Identity(n * 10)), Identity(20));
    }
}
