//! # monadkit
//!
//! Failure-aware value containers for Rust, and do-notation to sequence
//! them.
//!
//! ## Overview
//!
//! - **Containers**: `Maybe`, `Result`, `Try`, `Validated`, `List`, `Lazy`
//! - **Tasks**: `Task`, a memoized computation on a worker thread
//! - **Do-notation**: `run` and the `mdo!` macro, sequencing any mix of the
//!   containers with short-circuit on the first failure
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup
//! - **Extensions**: named optional bundles loaded through a registry
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: The containers
//! - `compose`: Do-notation
//! - `effect`: `Task` and executors
//! - `extension`: Extension registry
//! - `async`: Tokio executor for `Task`
//! - `rayon`: Rayon executor for `Task`
//! - `serde`: `Serialize`/`Deserialize` for the plain data containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadkit::prelude::*;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
//! }
//!
//! let quarter: Maybe<i32> = mdo! {
//!     a <= half(20);
//!     b <= half(a);
//!     yield b
//! };
//! assert_eq!(quarter, Maybe::some(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits, and the `mdo!` macro.
///
/// # Usage
///
/// ```rust
/// use monadkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "compose")]
    pub use crate::mdo;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "extension")]
    pub use crate::extension::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "extension")]
pub mod extension;
