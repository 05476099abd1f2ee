//! Do-notation: sequencing fallible computations with implicit
//! short-circuit.
//!
//! # Overview
//!
//! - [`run`] and [`Scope`]: the engine. A scope unwraps each successful
//!   submission and halts at the first failure.
//! - [`mdo!`]: macro sugar over `run`.
//! - [`Monadic`], [`ToMonad`], [`FromFailure`], [`ShortCircuit`]: the
//!   classification protocol. Implement [`ToMonad`] for your own type to submit it to a
//!   scope or to [`List::traverse`](crate::control::List::traverse).
//!
//! # Examples
//!
//! ## Explicit scope
//!
//! ```
//! use monadkit::compose::run;
//! use monadkit::control::Maybe;
//!
//! fn lookup(key: &str) -> Maybe<i32> {
//!     match key {
//!         "a" => Maybe::some(1),
//!         "b" => Maybe::some(2),
//!         _ => Maybe::none(),
//!     }
//! }
//!
//! let found: Maybe<i32> = run(|scope| {
//!     let a = scope.bind(lookup("a"))?;
//!     let b = scope.bind(lookup("b"))?;
//!     scope.pure(a + b)
//! });
//! assert_eq!(found, Maybe::some(3));
//! ```
//!
//! ## Macro
//!
//! ```
//! use monadkit::mdo;
//! use monadkit::control::Result;
//!
//! fn parse(text: &str) -> Result<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total: Result<i32, String> = mdo! {
//!     a <= parse("20");
//!     b <= parse("x");
//!     yield a + b
//! };
//! assert!(total.is_failure());
//! ```
//!
//! ## Release on abort
//!
//! Locals of the scope body are dropped when a submission fails, so a
//! `Drop` guard performs its release step while the code after the failing
//! submission does not run.
//!
//! ```
//! use monadkit::compose::run;
//! use monadkit::control::Maybe;
//! use std::cell::Cell;
//!
//! struct Release<'a>(&'a Cell<bool>);
//!
//! impl Drop for Release<'_> {
//!     fn drop(&mut self) {
//!         self.0.set(true);
//!     }
//! }
//!
//! let released = Cell::new(false);
//! let committed = Cell::new(false);
//! let outcome: Maybe<i32> = run(|scope| {
//!     let _guard = Release(&released);
//!     let value = scope.bind(Maybe::<i32>::None)?;
//!     committed.set(true);
//!     scope.pure(value)
//! });
//! assert_eq!(outcome, Maybe::None);
//! assert!(released.get());
//! assert!(!committed.get());
//! ```

mod classify;
mod do_notation;
mod mdo_macro;

pub use classify::{FromFailure, Monadic, ShortCircuit, ToMonad};
pub use do_notation::{Abort, Scope, ScopeState, run};
