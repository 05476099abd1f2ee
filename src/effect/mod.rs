//! Deferred computations on worker threads.
//!
//! - [`Task`]: starts a computation at construction and memoizes its
//!   outcome; observers block until it settles
//! - [`Executor`]: where the computation runs
//!
//! Tasks are the only part of the crate that involves more than one thread.
//! There is no cancellation: a started task always runs to settlement.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::effect::{ImmediateExecutor, Task};
//! use std::sync::Arc;
//!
//! let inline = Task::with_executor(Arc::new(ImmediateExecutor), || 21);
//! assert!(inline.is_settled());
//!
//! let doubled = inline.fmap(|n| n * 2);
//! assert_eq!(doubled.value(), Ok(42));
//! ```

mod executor;
mod task;

#[cfg(feature = "rayon")]
pub use executor::RayonExecutor;
#[cfg(feature = "async")]
pub use executor::TokioExecutor;
pub use executor::{Executor, ImmediateExecutor, Job, ThreadExecutor, default_executor};
pub use task::Task;
