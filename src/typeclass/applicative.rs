//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - lifting a plain value into the context (`pure`)
//! - combining two independent computations (`map2`)
//!
//! For the short-circuiting containers (`Maybe`, `Result`, `Try`) `map2`
//! stops at the first failure. For `Validated` it keeps both sides, which is
//! what makes `Validated` useful for reporting every failed check at once.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! Self::pure(x).map2(fa, |_, a| a) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Maybe, Validated};
//! use monadkit::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::some(42));
//!
//! let left: Validated<i32, &str> = Validated::invalid("a");
//! let right: Validated<i32, &str> = Validated::invalid("b");
//! assert_eq!(left.map2(right, |x, y| x + y), Validated::invalid_all(vec!["a", "b"]));
//! ```

use super::functor::Functor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Maybe, Result, Try, Validated};

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Result;
    /// use monadkit::typeclass::Applicative;
    ///
    /// let lifted: Result<&str, ()> = <Result<(), ()>>::pure("hello");
    /// assert_eq!(lifted, Result::success("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(first), Maybe::Some(second)) => Maybe::Some(function(first, second)),
            _ => Maybe::None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Result::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Result::Success(second)) => {
                Result::Success(function(first, second))
            }
            (Self::Failure(error), _) | (Self::Success(_), Result::Failure(error)) => {
                Result::Failure(error)
            }
        }
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Applicative for Try<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Try<B, E> {
        Try::Value(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Try<B, E>, function: F) -> Try<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Value(first), Try::Value(second)) => Try::Value(function(first, second)),
            (Self::Error(error), _) | (Self::Value(_), Try::Error(error)) => Try::Error(error),
        }
    }
}

// =============================================================================
// Validated<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Applicative for Validated<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Validated<B, E> {
        Validated::Valid(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validated<B, E>, function: F) -> Validated<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.and(other).fmap(|(first, second)| function(first, second))
    }
}
