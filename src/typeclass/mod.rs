//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `List::traverse` be written once for every
//! short-circuiting container.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::{Applicative, Monad};
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(20);
//! let y = x.flat_map(|n| Maybe::some(n + 1)).map2(Maybe::some(2), |a, b| a * b);
//! assert_eq!(y, Maybe::some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::{Functor, FunctorRef};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use semigroup::Semigroup;
