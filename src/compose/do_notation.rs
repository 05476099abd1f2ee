//! The do-notation engine.
//!
//! [`run`] opens a sequencing scope and hands the body a [`Scope`]. Inside
//! the body every submission goes through [`Scope::bind`], which unwraps a
//! success or halts the scope on a failure. Halting returns an [`Abort`]
//! token that the body propagates with `?`; nothing after the failing
//! submission runs, and the scope resolves to the failure unchanged.
//!
//! ```text
//! Running --bind(success)--> Running
//! Running --bind(failure)--> Halted(failure)
//! Halted  --bind(_)--------> Halted(failure)   (submission skipped)
//! ```
//!
//! Early exit is plain `?` on a typed token, so locals of the body are
//! dropped on the way out: a `Drop` guard created before the failing
//! submission performs its release step.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::compose::run;
//! use monadkit::control::Result;
//!
//! let total: Result<i32, &str> = run(|scope| {
//!     let a = scope.bind(Result::<i32, &str>::success(1))?;
//!     let b = scope.bind(Result::<i32, &str>::failure("x"))?;
//!     let c = scope.bind(Result::<i32, &str>::success(2))?;
//!     scope.pure(a + b + c)
//! });
//! assert_eq!(total, Result::failure("x"));
//! ```

use std::fmt;
use std::ops::ControlFlow;
use std::result::Result as StdResult;

use super::{FromFailure, Monadic, ToMonad};
use crate::typeclass::Applicative;

/// Where a scope is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeState<R> {
    /// No failure has been submitted.
    Running,
    /// A failure was submitted; the scope resolves to it.
    Halted(R),
}

/// Token proving that the current scope has halted.
///
/// Only [`Scope`] creates it. Return it from the scope body (usually with
/// `?`) to unwind to the boundary.
#[derive(Debug, PartialEq, Eq)]
pub struct Abort {
    _private: (),
}

impl fmt::Display for Abort {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("do-notation scope halted")
    }
}

impl std::error::Error for Abort {}

/// A running sequencing scope whose overall result has type `R`.
#[derive(Debug)]
pub struct Scope<R> {
    state: ScopeState<R>,
    submissions: usize,
}

impl<R> Scope<R> {
    const fn new() -> Self {
        Self {
            state: ScopeState::Running,
            submissions: 0,
        }
    }

    /// Submits a value.
    ///
    /// A success is unwrapped and returned. A failure halts the scope and
    /// yields `Err(Abort)`. Once halted, every further submission is
    /// rejected without being classified.
    ///
    /// # Errors
    ///
    /// Returns [`Abort`] when the submission fails or the scope has already
    /// halted.
    pub fn bind<M>(&mut self, submission: M) -> StdResult<<M::Monad as Monadic>::Value, Abort>
    where
        M: ToMonad,
        R: FromFailure<<M::Monad as Monadic>::Residual>,
    {
        if self.is_halted() {
            return Err(Abort { _private: () });
        }
        self.submissions += 1;
        match submission.to_monad().branch() {
            ControlFlow::Continue(value) => Ok(value),
            ControlFlow::Break(residual) => {
                tracing::debug!(submission = self.submissions, "do-notation scope halted");
                self.state = ScopeState::Halted(R::from_failure(residual));
                Err(Abort { _private: () })
            }
        }
    }

    /// Like [`bind`](Self::bind), but builds the submission only while the
    /// scope is running.
    ///
    /// # Errors
    ///
    /// Returns [`Abort`] when the submission fails or the scope has already
    /// halted; `submission` is not called in the latter case.
    pub fn bind_with<M, F>(&mut self, submission: F) -> StdResult<<M::Monad as Monadic>::Value, Abort>
    where
        M: ToMonad,
        F: FnOnce() -> M,
        R: FromFailure<<M::Monad as Monadic>::Residual>,
    {
        if self.is_halted() {
            return Err(Abort { _private: () });
        }
        self.bind(submission())
    }

    /// Wraps the final value as the success of `R`.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` lets it sit in tail position of a scope
    /// body.
    pub fn pure<V>(&self, value: V) -> StdResult<R, Abort>
    where
        R: Applicative,
        R::WithType<V>: Into<R>,
    {
        Ok(R::pure(value).into())
    }

    /// The current state.
    pub const fn state(&self) -> &ScopeState<R> {
        &self.state
    }

    /// Returns `true` once a failure has been submitted.
    pub const fn is_halted(&self) -> bool {
        matches!(self.state, ScopeState::Halted(_))
    }
}

/// Runs `body` inside a fresh scope.
///
/// The scope resolves to the first failure submitted, or to the body's own
/// result if nothing failed. Each call owns its scope, so nested and
/// concurrent calls do not interfere.
///
/// # Panics
///
/// Panics when the body returns an [`Abort`] although its own scope never
/// halted, which can only happen if the token was smuggled out of another
/// scope.
pub fn run<R, F>(body: F) -> R
where
    F: FnOnce(&mut Scope<R>) -> StdResult<R, Abort>,
{
    let mut scope = Scope::new();
    let outcome = body(&mut scope);
    match (scope.state, outcome) {
        (ScopeState::Halted(failure), _) => failure,
        (ScopeState::Running, Ok(value)) => value,
        (ScopeState::Running, Err(_)) => {
            panic!("Abort returned from a do-notation scope that never halted")
        }
    }
}
