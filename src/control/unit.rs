//! Sentinel values: [`Unit`] and [`Undefined`].
//!
//! `Unit` is the canonical "no meaningful value" payload. It is a real value:
//! `Result::Success(Unit)` is a success, and it is distinct from
//! `Maybe::None`. `Undefined` marks an argument that was not supplied at all,
//! which is a third state next to "supplied a value" and "supplied `None`".

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Maybe;

/// The canonical empty payload.
///
/// `Display` writes nothing, so a variant wrapping `Unit` renders as
/// `Variant()`.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::{Result, Unit};
///
/// let done: Result<Unit, String> = Result::unit();
/// assert_eq!(done.to_string(), "Success()");
/// assert_eq!(format!("{Unit:?}"), "Unit");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit;

impl fmt::Debug for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Unit")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, _formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Self
    }
}

/// Marker for an argument that was omitted.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::{Maybe, Undefined};
///
/// assert_eq!(Undefined::resolve(Some(3), || 10), 3);
/// assert_eq!(Undefined::resolve(None, || 10), 10);
///
/// let absent: Maybe<i32> = Undefined.into();
/// assert!(absent.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Undefined;

impl Undefined {
    /// Resolves a possibly-omitted argument, evaluating `fallback` only when
    /// nothing was supplied.
    #[inline]
    pub fn resolve<T, F>(supplied: Option<T>, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        supplied.unwrap_or_else(fallback)
    }

    /// Applies `function` to a supplied argument, leaving an omitted one
    /// omitted.
    #[inline]
    pub fn map<T, U, F>(supplied: Option<T>, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        supplied.map(function)
    }
}

impl fmt::Display for Undefined {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Undefined")
    }
}

impl<T> From<Undefined> for Maybe<T> {
    fn from(_: Undefined) -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unit_renders_empty_and_debugs_by_name() {
        assert_eq!(Unit.to_string(), "");
        assert_eq!(format!("{Unit:?}"), "Unit");
    }

    #[rstest]
    fn unit_is_distinct_from_none() {
        assert_ne!(Maybe::some(Unit), Maybe::None);
    }

    #[rstest]
    fn undefined_resolve_is_lazy() {
        let mut calls = 0;
        let value = Undefined::resolve(Some(1), || {
            calls += 1;
            2
        });
        assert_eq!(value, 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn undefined_map_keeps_omission() {
        assert_eq!(Undefined::map(None::<i32>, |n| n + 1), None);
        assert_eq!(Undefined::map(Some(1), |n| n + 1), Some(2));
        assert_eq!(Undefined.to_string(), "Undefined");
    }
}
