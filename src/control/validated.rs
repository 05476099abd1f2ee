//! Validated type - accumulating validation.
//!
//! `Validated<T, E>` is either `Valid(value)` or `Invalid(errors)`. Unlike
//! [`Result`](super::Result) it never short-circuits: combining two
//! independent checks keeps the errors of *both*, left before right.
//!
//! | left       | right      | `combine_with(left, right, merge)` |
//! |------------|------------|------------------------------------|
//! | `Valid(a)` | `Valid(b)` | `Valid(merge(a, b))`               |
//! | `Valid(_)` | `Invalid(e2)` | `Invalid(e2)`                   |
//! | `Invalid(e1)` | `Valid(_)` | `Invalid(e1)`                   |
//! | `Invalid(e1)` | `Invalid(e2)` | `Invalid(e1 ++ e2)`          |
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Validated;
//!
//! fn non_empty(name: &str) -> Validated<String, &'static str> {
//!     if name.is_empty() { Validated::invalid("name is empty") } else { Validated::valid(name.to_string()) }
//! }
//!
//! fn adult(age: u32) -> Validated<u32, &'static str> {
//!     if age < 18 { Validated::invalid("too young") } else { Validated::valid(age) }
//! }
//!
//! let checked = non_empty("").and(adult(12));
//! assert_eq!(checked.errors(), ["name is empty", "too young"]);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Maybe, Result};
use crate::typeclass::TypeConstructor;

/// A value, or every error collected while producing it.
///
/// `Invalid` always holds at least one error when built through the
/// constructors of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Validated<T, E> {
    /// All checks passed.
    Valid(T),
    /// The errors collected, in the order they were found.
    Invalid(Vec<E>),
}

impl<T, E> Validated<T, E> {
    /// Creates a `Valid`.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an `Invalid` holding one error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(vec![error])
    }

    /// Creates an `Invalid` from a sequence of errors.
    ///
    /// # Panics
    ///
    /// Panics when `errors` is empty: an invalid outcome without a reason is
    /// a contract violation.
    #[track_caller]
    pub fn invalid_all(errors: Vec<E>) -> Self {
        assert!(!errors.is_empty(), "Validated::invalid_all requires at least one error");
        Self::Invalid(errors)
    }

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The collected errors; empty for `Valid`.
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Combines two independent outcomes. `merge` only runs when both are
    /// valid; errors from both sides are concatenated otherwise.
    pub fn combine_with<U, V, F>(self, other: Validated<U, E>, merge: F) -> Validated<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Valid(left), Validated::Valid(right)) => Validated::Valid(merge(left, right)),
            (Self::Valid(_), Validated::Invalid(errors))
            | (Self::Invalid(errors), Validated::Valid(_)) => Validated::Invalid(errors),
            (Self::Invalid(mut left), Validated::Invalid(right)) => {
                left.extend(right);
                Validated::Invalid(left)
            }
        }
    }

    /// Pairs both payloads, accumulating errors.
    #[inline]
    pub fn and<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        self.combine_with(other, |left, right| (left, right))
    }

    /// Maps the valid payload.
    #[inline]
    pub fn fmap<U, F>(self, function: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Maps every collected error.
    pub fn fmap_invalid<G, F>(self, function: F) -> Validated<T, G>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(errors) => Validated::Invalid(errors.into_iter().map(function).collect()),
        }
    }

    /// Unwraps the valid payload, falling back to `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// `Valid(v)` becomes `Some(v)`; the errors are discarded otherwise.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Valid(value) => Maybe::Some(value),
            Self::Invalid(_) => Maybe::None,
        }
    }

    /// `Valid(v)` becomes `Success(v)`, `Invalid(errors)` becomes
    /// `Failure(errors)`.
    #[inline]
    pub fn to_result(self) -> Result<T, Vec<E>> {
        match self {
            Self::Valid(value) => Result::Success(value),
            Self::Invalid(errors) => Result::Failure(errors),
        }
    }
}

impl<T, E> TypeConstructor for Validated<T, E> {
    type Inner = T;
    type WithType<B> = Validated<B, E>;
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validated<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(errors) => {
                formatter.write_str("Invalid(")?;
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{error}")?;
                }
                formatter.write_str(")")
            }
        }
    }
}
