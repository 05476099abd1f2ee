//! Lazy evaluation with memoization.
//!
//! `Lazy<T, F>` stores a computation unevaluated. The first call to
//! [`force`](Lazy::force) runs it and memoizes the outcome; every later call,
//! from any thread, returns the memoized outcome without running it again.
//!
//! A panic inside the computation is not a poisoned state: it is captured as
//! a [`Fault`] and memoized like a value, so the outcome is always a
//! `Try<T, Fault>`. A typed payload raised with `std::panic::panic_any` is
//! kept as [`Fault::Thrown`](super::Fault::Thrown).
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Lazy, Try};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = AtomicUsize::new(0);
//! let lazy = Lazy::new(|| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     42
//! });
//!
//! assert!(!lazy.is_forced());
//! assert_eq!(lazy.force(), &Try::Value(42));
//! assert_eq!(lazy.force(), &Try::Value(42));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```
//!
//! # Re-entry
//!
//! Forcing a `Lazy` from inside its own computation blocks forever.

use std::fmt;
use std::result::Result as StdResult;
use std::sync::OnceLock;

use parking_lot::Mutex;

use super::{Fault, Maybe, Result, Try};

/// A deferred, memoized computation.
///
/// The computation is released as soon as the outcome is memoized.
pub struct Lazy<T, F = fn() -> T> {
    initializer: Mutex<Option<F>>,
    outcome: OnceLock<Try<T, Fault>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Wraps a computation without running it.
    #[inline]
    pub fn new(initializer: F) -> Self {
        Self {
            initializer: Mutex::new(Some(initializer)),
            outcome: OnceLock::new(),
        }
    }

    /// Runs the computation if it has not run yet and returns the memoized
    /// outcome.
    ///
    /// Concurrent callers block until the first one has settled the
    /// outcome; the computation runs exactly once.
    pub fn force(&self) -> &Try<T, Fault> {
        self.outcome.get_or_init(|| {
            let initializer = self.initializer.lock().take();
            tracing::trace!("forcing lazy computation");
            let outcome = initializer.map_or(Try::Error(Fault::Abandoned), Fault::capture);
            if let Try::Error(fault) = &outcome {
                tracing::debug!(%fault, "lazy computation faulted");
            }
            outcome
        })
    }

    /// Forces and borrows the value.
    ///
    /// # Errors
    ///
    /// Returns the memoized fault when the computation panicked.
    #[inline]
    pub fn value(&self) -> StdResult<&T, &Fault> {
        self.force().as_ref().into_std()
    }

    /// Consumes the `Lazy` and returns its outcome, running the computation
    /// if needed.
    pub fn into_outcome(self) -> Try<T, Fault> {
        match self.outcome.into_inner() {
            Some(outcome) => outcome,
            None => self
                .initializer
                .into_inner()
                .map_or(Try::Error(Fault::Abandoned), Fault::capture),
        }
    }

    /// Forces and converts: a value becomes `Some`, a fault becomes `None`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        self.into_outcome().to_maybe()
    }

    /// Forces and converts: a value becomes `Success`, a fault becomes
    /// `Failure(fault)`.
    #[inline]
    pub fn to_result(self) -> Result<T, Fault> {
        self.into_outcome().to_result()
    }

    /// Composes a function after the computation without forcing it.
    ///
    /// A fault from upstream is carried through unchanged; `function` does
    /// not run in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{Lazy, Try};
    ///
    /// let doubled = Lazy::new(|| 21).fmap(|n| n * 2);
    /// assert!(!doubled.is_forced());
    /// assert_eq!(doubled.force(), &Try::Value(42));
    /// ```
    pub fn fmap<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || match self.into_outcome() {
            Try::Value(value) => function(value),
            Try::Error(fault) => fault.propagate(),
        })
    }

    /// Chains a computation that itself produces a `Lazy`, without forcing
    /// either.
    pub fn bind<U, H, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> Lazy<U, H>,
        H: FnOnce() -> U,
    {
        Lazy::new(move || {
            let next = match self.into_outcome() {
                Try::Value(value) => function(value),
                Try::Error(fault) => fault.propagate(),
            };
            match next.into_outcome() {
                Try::Value(value) => value,
                Try::Error(fault) => fault.propagate(),
            }
        })
    }

    /// Combines two lazy values without forcing either. When both fault,
    /// the fault of `self` wins.
    pub fn zip_with<U, V, H, G>(self, other: Lazy<U, H>, function: G) -> Lazy<V, impl FnOnce() -> V>
    where
        H: FnOnce() -> U,
        G: FnOnce(T, U) -> V,
    {
        Lazy::new(move || match (self.into_outcome(), other.into_outcome()) {
            (Try::Value(left), Try::Value(right)) => function(left, right),
            (Try::Error(fault), _) | (_, Try::Error(fault)) => fault.propagate(),
        })
    }
}

impl<T> Lazy<T> {
    /// Creates an already-forced `Lazy` holding `value`.
    pub fn pure(value: T) -> Self {
        Self::settled(Try::Value(value))
    }

    /// Creates an already-forced `Lazy` holding `fault`.
    pub fn failed(fault: Fault) -> Self {
        Self::settled(Try::Error(fault))
    }

    fn settled(outcome: Try<T, Fault>) -> Self {
        Self {
            initializer: Mutex::new(None),
            outcome: OnceLock::from(outcome),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns `true` once the outcome is memoized.
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// The memoized outcome, without forcing.
    #[inline]
    pub fn get(&self) -> Option<&Try<T, Fault>> {
        self.outcome.get()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome.get() {
            Some(outcome) => formatter.debug_tuple("Lazy").field(outcome).finish(),
            None => formatter.write_str("Lazy(<pending>)"),
        }
    }
}

static_assertions::assert_impl_all!(Lazy<i32>: Send, Sync);
