//! Maybe type - optional presence of a value.
//!
//! `Maybe<T>` is either `Some(value)` or `None`. `None` carries no payload:
//! it says nothing about *why* a value is missing. Use
//! [`Result`](super::Result) when the reason matters.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     Maybe::lift([(1, "ada"), (2, "grace")].iter().find(|(key, _)| *key == id).map(|(_, name)| *name))
//! }
//!
//! let greeting = find_user(1).fmap(|name| format!("hello, {name}"));
//! assert_eq!(greeting, Maybe::some("hello, ada".to_string()));
//!
//! assert_eq!(find_user(9).value_or("guest"), "guest");
//! assert_eq!(find_user(9).to_string(), "None");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Result, Unit};
use crate::typeclass::TypeConstructor;

/// An optional value.
///
/// Two `None`s are equal; `Some(a) == Some(b)` iff `a == b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// Absence. Carries no payload.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Some`, bypassing any absence check.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns `None`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Lifts a native optional value: `Option::None` becomes `None`,
    /// anything else becomes `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::lift(Some(3)), Maybe::some(3));
    /// assert_eq!(Maybe::<i32>::lift(None), Maybe::None);
    /// ```
    #[inline]
    pub fn lift(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` for `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` for `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Monadic bind: runs `function` on the payload of `Some`; `None` is
    /// returned without invoking it.
    ///
    /// The continuation has to return a `Maybe`; anything else is rejected
    /// by the compiler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).bind(half).bind(half), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Alias for [`bind`](Self::bind).
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(function)
    }

    /// Transforms the payload of `Some`; `None` stays `None`.
    #[inline]
    pub fn fmap<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Keeps `Some` only when the predicate holds.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Replaces the payload with [`Unit`].
    #[inline]
    pub fn discard(self) -> Maybe<Unit> {
        self.fmap(|_| Unit)
    }

    // =========================================================================
    // Alternatives and Extraction
    // =========================================================================

    /// Returns `self` if it is `Some`, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns `self` if it is `Some`, otherwise evaluates `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => alternative(),
        }
    }

    /// Unwraps the payload, falling back to `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Unwraps the payload, computing the fallback only for `None`.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Unwraps the payload.
    ///
    /// # Panics
    ///
    /// Panics when called on `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("Maybe::unwrap called on None"),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Result`, using `error` for `None`.
    #[inline]
    pub fn to_result<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Success(value),
            Self::None => Result::Failure(error),
        }
    }

    /// Converts into a `Result`, computing the error only for `None`.
    #[inline]
    pub fn to_result_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Success(value),
            Self::None => Result::Failure(error()),
        }
    }

    /// Converts into a native `Option`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl Maybe<Unit> {
    /// `Some(Unit)`: presence without a meaningful payload.
    #[inline]
    pub const fn unit() -> Self {
        Self::Some(Unit)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::lift(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.to_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}
