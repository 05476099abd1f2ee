//! Success/failure classification for the do-notation engine.
//!
//! Three traits connect a container to [`run`](super::run):
//!
//! - [`Monadic`] splits a container into the value to continue with, or the
//!   residual that ends the scope;
//! - [`ToMonad`] is the coercion hook: any type opts in by naming the
//!   `Monadic` it becomes;
//! - [`FromFailure`] rebuilds the scope's result type from a residual.
//!
//! A residual is the failure half of a container with the success type
//! replaced by [`Infallible`]: `Result<Infallible, E>` can only be a
//! `Failure`, `Maybe<Infallible>` can only be `None`.

use std::convert::Infallible;
use std::ops::ControlFlow;
use std::result::Result as StdResult;

use crate::control::{Fault, Lazy, List, Maybe, Result, Try, Validated};
use crate::typeclass::Identity;

/// A container that is either a success holding a value or a failure.
///
/// # Examples
///
/// ```rust
/// use monadkit::compose::Monadic;
/// use monadkit::control::Result;
/// use std::ops::ControlFlow;
///
/// let failure: Result<i32, &str> = Result::failure("x");
/// assert!(!failure.is_success());
/// assert!(matches!(failure.branch(), ControlFlow::Break(Result::Failure("x"))));
/// ```
pub trait Monadic: Sized {
    /// The payload of the success variant.
    type Value;

    /// The failure variant, with the success type erased.
    type Residual;

    /// Continues with the success payload or breaks with the residual.
    fn branch(self) -> ControlFlow<Self::Residual, Self::Value>;

    /// Classifies without unwrapping.
    fn is_success(&self) -> bool;
}

/// Coercion into a [`Monadic`] container.
///
/// Anything implementing this can be submitted to a do-notation scope.
pub trait ToMonad {
    /// The container this value becomes.
    type Monad: Monadic;

    /// Performs the coercion.
    fn to_monad(self) -> Self::Monad;
}

/// A [`Monadic`] whose failures short-circuit a traversal.
///
/// [`List::traverse`](crate::control::List::traverse) accepts these.
/// `Validated` is deliberately left out: traversals over it accumulate
/// through [`List::traverse_validated`](crate::control::List::traverse_validated).
pub trait ShortCircuit: Monadic {}

impl<T> ShortCircuit for Maybe<T> {}
impl<T, E> ShortCircuit for Result<T, E> {}
impl<T, E> ShortCircuit for Try<T, E> {}
impl<T> ShortCircuit for Identity<T> {}

/// Rebuilds a container from the residual of a failed submission.
pub trait FromFailure<R> {
    /// Builds the failure variant carrying `residual`'s payload.
    fn from_failure(residual: R) -> Self;
}

// =============================================================================
// Monadic
// =============================================================================

impl<T> Monadic for Maybe<T> {
    type Value = T;
    type Residual = Maybe<Infallible>;

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Self::Some(value) => ControlFlow::Continue(value),
            Self::None => ControlFlow::Break(Maybe::None),
        }
    }

    #[inline]
    fn is_success(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Monadic for Result<T, E> {
    type Value = T;
    type Residual = Result<Infallible, E>;

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Self::Success(value) => ControlFlow::Continue(value),
            Self::Failure(error) => ControlFlow::Break(Result::Failure(error)),
        }
    }

    #[inline]
    fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T, E> Monadic for Try<T, E> {
    type Value = T;
    type Residual = Try<Infallible, E>;

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Self::Value(value) => ControlFlow::Continue(value),
            Self::Error(error) => ControlFlow::Break(Try::Error(error)),
        }
    }

    #[inline]
    fn is_success(&self) -> bool {
        self.is_value()
    }
}

impl<T, E> Monadic for Validated<T, E> {
    type Value = T;
    type Residual = Validated<Infallible, E>;

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Self::Valid(value) => ControlFlow::Continue(value),
            Self::Invalid(errors) => ControlFlow::Break(Validated::Invalid(errors)),
        }
    }

    #[inline]
    fn is_success(&self) -> bool {
        self.is_valid()
    }
}

/// Plain values never fail.
impl<T> Monadic for Identity<T> {
    type Value = T;
    type Residual = Infallible;

    #[inline]
    fn branch(self) -> ControlFlow<Infallible, T> {
        ControlFlow::Continue(self.0)
    }

    #[inline]
    fn is_success(&self) -> bool {
        true
    }
}

// =============================================================================
// FromFailure
// =============================================================================

impl<R> FromFailure<Infallible> for R {
    fn from_failure(residual: Infallible) -> Self {
        match residual {}
    }
}

impl<T> FromFailure<Maybe<Infallible>> for Maybe<T> {
    #[inline]
    fn from_failure(_: Maybe<Infallible>) -> Self {
        Self::None
    }
}

impl<T, E, F: Into<E>> FromFailure<Result<Infallible, F>> for Result<T, E> {
    #[inline]
    fn from_failure(residual: Result<Infallible, F>) -> Self {
        match residual {
            Result::Failure(error) => Self::Failure(error.into()),
            Result::Success(never) => match never {},
        }
    }
}

impl<T, E, F: Into<E>> FromFailure<Try<Infallible, F>> for Result<T, E> {
    #[inline]
    fn from_failure(residual: Try<Infallible, F>) -> Self {
        match residual {
            Try::Error(error) => Self::Failure(error.into()),
            Try::Value(never) => match never {},
        }
    }
}

impl<T, E, F: Into<E>> FromFailure<Try<Infallible, F>> for Try<T, E> {
    #[inline]
    fn from_failure(residual: Try<Infallible, F>) -> Self {
        match residual {
            Try::Error(error) => Self::Error(error.into()),
            Try::Value(never) => match never {},
        }
    }
}

impl<T, E, F: Into<E>> FromFailure<Result<Infallible, F>> for Try<T, E> {
    #[inline]
    fn from_failure(residual: Result<Infallible, F>) -> Self {
        match residual {
            Result::Failure(error) => Self::Error(error.into()),
            Result::Success(never) => match never {},
        }
    }
}

impl<T, E, F: Into<E>> FromFailure<Validated<Infallible, F>> for Validated<T, E> {
    fn from_failure(residual: Validated<Infallible, F>) -> Self {
        match residual {
            Validated::Invalid(errors) => Self::Invalid(errors.into_iter().map(Into::into).collect()),
            Validated::Valid(never) => match never {},
        }
    }
}

// =============================================================================
// ToMonad
// =============================================================================

impl<T> ToMonad for Maybe<T> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

impl<T, E> ToMonad for Result<T, E> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

impl<T, E> ToMonad for Try<T, E> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

impl<T, E> ToMonad for Validated<T, E> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

impl<T> ToMonad for Identity<T> {
    type Monad = Self;

    #[inline]
    fn to_monad(self) -> Self {
        self
    }
}

impl<T> ToMonad for Option<T> {
    type Monad = Maybe<T>;

    #[inline]
    fn to_monad(self) -> Maybe<T> {
        Maybe::lift(self)
    }
}

impl<T, E> ToMonad for StdResult<T, E> {
    type Monad = Result<T, E>;

    #[inline]
    fn to_monad(self) -> Result<T, E> {
        self.into()
    }
}

/// A list classifies like a `Maybe` of its first element.
impl<T> ToMonad for List<T> {
    type Monad = Maybe<T>;

    #[inline]
    fn to_monad(self) -> Maybe<T> {
        self.into_head()
    }
}

/// Forces the computation.
impl<T, F: FnOnce() -> T> ToMonad for Lazy<T, F> {
    type Monad = Try<T, Fault>;

    #[inline]
    fn to_monad(self) -> Try<T, Fault> {
        self.into_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify<M: ToMonad>(value: M) -> bool {
        value.to_monad().is_success()
    }

    #[rstest]
    fn success_variants_classify_as_success() {
        assert!(classify(Maybe::some(1)));
        assert!(classify(Result::<i32, ()>::success(1)));
        assert!(classify(Try::<i32, ()>::Value(1)));
        assert!(classify(Validated::<i32, ()>::valid(1)));
        assert!(classify(Identity(1)));
        assert!(classify(List::from(vec![1, 2])));
    }

    #[rstest]
    fn failure_variants_classify_as_failure() {
        assert!(!classify(Maybe::<i32>::None));
        assert!(!classify(Result::<i32, ()>::failure(())));
        assert!(!classify(Try::<i32, ()>::Error(())));
        assert!(!classify(Validated::<i32, ()>::invalid(())));
        assert!(!classify(List::<i32>::new()));
        assert!(!classify(None::<i32>));
    }

    #[rstest]
    fn lazy_is_forced_by_coercion() {
        let lazy = Lazy::new(|| 3);
        assert_eq!(lazy.to_monad(), Try::Value(3));
    }

    #[rstest]
    fn residual_error_is_converted() {
        let rebuilt: Result<u8, String> = FromFailure::from_failure(Result::<Infallible, &str>::failure("e"));
        assert_eq!(rebuilt, Result::failure("e".to_string()));

        let rebuilt: Validated<u8, String> =
            FromFailure::from_failure(Validated::<Infallible, &str>::invalid_all(vec!["a", "b"]));
        assert_eq!(rebuilt.errors(), ["a".to_string(), "b".to_string()]);
    }
}
