//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//! A `Functor` transforms the contents of a container without changing its
//! shape: a `Failure` stays a `Failure`, a `None` stays a `None`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::Functor;
//!
//! let transformed = Maybe::some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//!
//! let none: Maybe<i32> = Maybe::none();
//! assert_eq!(none.fmap(|n| n.to_string()), Maybe::None);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Maybe, Result, Try, Validated};

/// A type class for single-slot containers that can have a function mapped
/// over their contents.
///
/// Multi-element containers such as [`List`](crate::control::List) expose an
/// inherent `fmap` taking `FnMut` instead, because `FnOnce` can only be
/// called once.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::Result;
/// use monadkit::typeclass::Functor;
///
/// let success: Result<i32, String> = Result::success(5);
/// assert_eq!(success.fmap(|n| n * 2), Result::success(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    /// use monadkit::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).fmap(|n| n * 2), Maybe::some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    /// use monadkit::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).replace("replaced"), Maybe::some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::fmap(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        Self::fmap(self, function)
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Functor for Try<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        Self::fmap(self, function)
    }
}

// =============================================================================
// Validated<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Functor for Validated<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validated<B, E>
    where
        F: FnOnce(T) -> B,
    {
        Self::fmap(self, function)
    }
}

// =============================================================================
// FunctorRef
// =============================================================================

/// Mapping through a borrow, leaving the original container available.
///
/// Kept apart from [`Functor`] because the failure-carrying containers have
/// to clone their failure payload to build the mapped copy.
pub trait FunctorRef: Functor {
    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

impl<A> FunctorRef for Identity<A> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

#[cfg(feature = "control")]
impl<A> FunctorRef for Maybe<A> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

#[cfg(feature = "control")]
impl<T, E: Clone> FunctorRef for Result<T, E> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(error) => Result::Failure(error.clone()),
        }
    }
}

#[cfg(feature = "control")]
impl<T, E: Clone> FunctorRef for Try<T, E> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Try<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Value(value) => Try::Value(function(value)),
            Self::Error(error) => Try::Error(error.clone()),
        }
    }
}

#[cfg(feature = "control")]
impl<T, E: Clone> FunctorRef for Validated<T, E> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validated<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors.clone()),
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_fmap_ref_keeps_original() {
        let original = Maybe::some("hello".to_string());
        let length = FunctorRef::fmap_ref(&original, |text| text.len());
        assert_eq!(length, Maybe::some(5));
        assert_eq!(original, Maybe::some("hello".to_string()));
    }

    #[rstest]
    fn result_fmap_ref_clones_failure() {
        let failure: Result<i32, String> = Result::failure("boom".to_string());
        let mapped = FunctorRef::fmap_ref(&failure, |value| value + 1);
        assert_eq!(mapped, Result::failure("boom".to_string()));
    }

    #[rstest]
    fn fmap_needs_no_clone_of_the_failure() {
        let failure: Result<i32, std::io::Error> = Result::failure(std::io::Error::other("eof"));
        let mapped = Functor::fmap(failure, |value| value + 1);
        assert_eq!(mapped.unwrap_failure().to_string(), "eof");
    }

    #[rstest]
    fn replace_and_void_preserve_shape() {
        assert_eq!(Functor::replace(Maybe::some(1), 'x'), Maybe::some('x'));
        assert_eq!(Functor::void(Maybe::<i32>::None), Maybe::None);
    }

    #[rstest]
    fn identity_fmap_transforms_value() {
        assert_eq!(Identity(20).fmap(|n| n + 1), Identity(21));
    }

    /// Identity law: fa.fmap(|x| x) == fa
    #[rstest]
    #[case(Try::Value(3))]
    #[case(Try::Error("bad"))]
    fn try_identity_law(#[case] value: Try<i32, &'static str>) {
        assert_eq!(Functor::fmap(value.clone(), |x| x), value);
    }

    /// Composition law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
    #[rstest]
    fn validated_composition_law() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;
        let value: Validated<i32, &str> = Validated::valid(5);

        let left = Functor::fmap(Functor::fmap(value.clone(), function1), function2);
        let right = Functor::fmap(value, move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Validated::valid(12));
    }
}
