//! Algebraic container types.
//!
//! - [`Maybe`]: optional presence of a value
//! - [`Result`]: success or failure, with a payload on each side
//! - [`FixedError`]: `Result` constructors pinned to one error kind
//! - [`Try`]: the captured outcome of a computation that may fault
//! - [`Validated`]: accumulating validation
//! - [`List`]: ordered sequence with `traverse`
//! - [`Lazy`]: deferred, memoized computation
//! - [`Unit`] and [`Undefined`]: sentinel values
//!
//! Every container is immutable once built. Combinators consume their
//! receiver and return a new value.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Maybe, Result, Try};
//!
//! let parsed: Try<i32, std::num::ParseIntError> = Try::run(|| "5".parse());
//! assert_eq!(parsed.to_maybe(), Maybe::some(5));
//!
//! let checked: Result<i32, &str> = Result::success(5);
//! assert_eq!(checked.to_maybe(), Maybe::some(5));
//! assert_eq!(Result::<i32, &str>::failure("e").to_maybe(), Maybe::None);
//! ```

mod fault;
mod fixed;
mod lazy;
mod list;
mod maybe;
mod result;
mod try_monad;
mod unit;
mod validated;

pub use fault::{Fault, Thrown};
pub use fixed::{ErrorKind, FixedError, InvalidFailureType};
pub use lazy::Lazy;
pub use list::List;
pub use maybe::Maybe;
pub use result::Result;
pub use try_monad::Try;
pub use unit::{Undefined, Unit};
pub use validated::Validated;
