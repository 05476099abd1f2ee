//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: a trait cannot abstract over
//! `Maybe<_>` or `List<_>` as type constructors. This module uses GAT to
//! work around that, which lets [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad) be stated
//! once for every container in the crate.
//!
//! # Example
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::TypeConstructor;
//!
//! fn describe<T>(_: &T) -> Option<T::WithType<String>>
//! where
//!     T: TypeConstructor,
//! {
//!     None
//! }
//!
//! let rebound: Option<Maybe<String>> = describe(&Maybe::some(42));
//! assert!(rebound.is_none());
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `Maybe<A>` or `List<A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Result<i32, E>` this is `Result<B, E>`: the error side stays pinned.
    type WithType<B>: TypeConstructor<Inner = B>;
}
