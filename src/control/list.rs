//! List type - an ordered sequence with non-deterministic bind.
//!
//! `List<T>` wraps a `Vec<T>` and exposes the sequence as a monad: `bind`
//! maps each element to a list and concatenates the results. Its main job in
//! this crate is [`traverse`](List::traverse), which turns a list of
//! elements and a function into a single container holding a list.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{List, Result};
//!
//! let checked = List::from(vec![1, 2, 3])
//!     .traverse(|n| if n < 3 { Result::success(n) } else { Result::failure("too big") });
//! assert_eq!(checked, Result::failure("too big"));
//!
//! let pairs = List::from(vec![1, 2]).bind(|n| List::from(vec![n, n * 10]));
//! assert_eq!(pairs.to_string(), "List[1, 10, 2, 20]");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Maybe, Validated};
use crate::typeclass::TypeConstructor;

#[cfg(feature = "compose")]
use crate::compose::{FromFailure, Monadic, ShortCircuit};
#[cfg(feature = "compose")]
use crate::typeclass::Applicative;
#[cfg(feature = "compose")]
use std::ops::ControlFlow;

/// An ordered, homogeneous sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<T>(Vec<T>);

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a list holding one element.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self(vec![value])
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over borrowed elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Unwraps the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// The first element, if any.
    #[inline]
    pub fn head(&self) -> Maybe<&T> {
        Maybe::lift(self.0.first())
    }

    /// The last element, if any.
    #[inline]
    pub fn last(&self) -> Maybe<&T> {
        Maybe::lift(self.0.last())
    }

    /// Consumes the list, keeping only the first element.
    #[inline]
    pub fn into_head(self) -> Maybe<T> {
        Maybe::lift(self.0.into_iter().next())
    }

    /// Maps every element.
    pub fn fmap<U, F>(self, function: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        List(self.0.into_iter().map(function).collect())
    }

    /// Maps every element to a list and concatenates the results in order.
    pub fn bind<U, F>(self, function: F) -> List<U>
    where
        F: FnMut(T) -> List<U>,
    {
        List(self.0.into_iter().flat_map(function).collect())
    }

    /// Keeps the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self(self.0.into_iter().filter(|element| predicate(element)).collect())
    }

    /// Concatenates `other` after `self`.
    #[must_use]
    pub fn or(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Left fold.
    pub fn fold<A, F>(self, initial: A, function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.0.into_iter().fold(initial, function)
    }

    /// Maps each element to a short-circuiting container and collects the
    /// unwrapped values.
    ///
    /// Elements are visited left to right. The first element whose mapped
    /// value is a failure ends the traversal: that failure is returned and
    /// `function` is not called for the remaining elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{List, Maybe};
    ///
    /// let halves = List::from(vec![2, 4, 6]).traverse(|n| {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
    /// });
    /// assert_eq!(halves, Maybe::some(List::from(vec![1, 2, 3])));
    /// ```
    #[cfg(feature = "compose")]
    pub fn traverse<M, F>(self, mut function: F) -> M::WithType<List<M::Value>>
    where
        M: ShortCircuit + Applicative,
        F: FnMut(T) -> M,
        M::WithType<List<M::Value>>: FromFailure<M::Residual>,
    {
        let mut values = Vec::with_capacity(self.0.len());
        for element in self.0 {
            match function(element).branch() {
                ControlFlow::Continue(value) => values.push(value),
                ControlFlow::Break(residual) => return FromFailure::from_failure(residual),
            }
        }
        M::pure(List(values))
    }

    /// Maps each element to a `Validated` and accumulates *every* error.
    ///
    /// Unlike [`traverse`](Self::traverse) this visits all elements.
    pub fn traverse_validated<U, E, F>(self, function: F) -> Validated<List<U>, E>
    where
        F: FnMut(T) -> Validated<U, E>,
    {
        self.0
            .into_iter()
            .map(function)
            .fold(Validated::Valid(List::new()), |accumulated, next| {
                accumulated.combine_with(next, |mut list, value| {
                    list.0.push(value);
                    list
                })
            })
    }
}

#[cfg(feature = "compose")]
impl<M> List<M>
where
    M: ShortCircuit + Applicative,
{
    /// Turns a list of containers into a container of a list.
    ///
    /// Equivalent to `traverse` with the identity function.
    pub fn sequence(self) -> M::WithType<List<M::Value>>
    where
        M::WithType<List<M::Value>>: FromFailure<M::Residual>,
    {
        self.traverse(|element| element)
    }
}

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.0
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("List[")?;
        for (index, element) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_concatenates_in_order() {
        let list = List::from(vec![1, 2]).bind(|n| List::from(vec![n; n]));
        assert_eq!(list, List::from(vec![1, 2, 2]));
    }

    #[rstest]
    fn head_and_last() {
        let list = List::from(vec!['a', 'b', 'c']);
        assert_eq!(list.head(), Maybe::some(&'a'));
        assert_eq!(list.last(), Maybe::some(&'c'));
        assert_eq!(List::<char>::new().head(), Maybe::None);
    }

    #[rstest]
    fn or_concatenates() {
        let joined = List::from(vec![1]).or(List::from(vec![2, 3]));
        assert_eq!(joined.into_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn traverse_validated_collects_every_error() {
        let checked = List::from(vec![1, -2, 3, -4]).traverse_validated(|n| {
            if n > 0 { Validated::valid(n) } else { Validated::invalid(n) }
        });
        assert_eq!(checked, Validated::invalid_all(vec![-2, -4]));
    }

    #[rstest]
    fn traverse_validated_keeps_order_when_valid() {
        let checked: Validated<List<i32>, ()> =
            List::from(vec![3, 1, 2]).traverse_validated(Validated::valid);
        assert_eq!(checked, Validated::valid(List::from(vec![3, 1, 2])));
    }

    #[rstest]
    fn rendering() {
        assert_eq!(List::from(vec![1, 2]).to_string(), "List[1, 2]");
        assert_eq!(List::<i32>::new().to_string(), "List[]");
    }

    #[cfg(feature = "compose")]
    mod traversal {
        use super::*;
        use crate::control::Result;

        #[rstest]
        fn traverse_stops_at_first_failure() {
            let mut visited = Vec::new();
            let outcome = List::from(vec![1, 2, 3, 4]).traverse(|n| {
                visited.push(n);
                if n < 3 { Result::success(n) } else { Result::failure("bad") }
            });
            assert_eq!(outcome, Result::failure("bad"));
            assert_eq!(visited, vec![1, 2, 3]);
        }

        #[rstest]
        fn sequence_of_successes() {
            let list: List<Maybe<i32>> = List::from(vec![Maybe::some(1), Maybe::some(2)]);
            assert_eq!(list.sequence(), Maybe::some(List::from(vec![1, 2])));
        }

        #[rstest]
        fn traverse_of_empty_list_succeeds() {
            let outcome = List::<i32>::new().traverse(Result::<i32, &str>::success);
            assert_eq!(outcome, Result::success(List::new()));
        }
    }
}
