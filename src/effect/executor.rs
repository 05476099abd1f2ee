//! Executors: where a [`Task`](super::Task) runs.
//!
//! An [`Executor`] receives a boxed job and runs it at some point, usually on
//! another thread. The job never panics (the task captures faults itself),
//! and it settles its task as abandoned if it is dropped without running.
//!
//! | Executor | Runs the job |
//! |---|---|
//! | [`ThreadExecutor`] | on a fresh OS thread |
//! | [`ImmediateExecutor`] | inline, before `execute` returns |
//! | `TokioExecutor` (feature `async`) | on a Tokio blocking thread |
//! | `RayonExecutor` (feature `rayon`) | on a Rayon thread pool |

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};
use std::thread;

/// A unit of work handed to an executor.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs jobs.
pub trait Executor: Send + Sync + 'static {
    /// Schedules `job`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the job could not be scheduled. The
    /// job has been dropped in that case.
    fn execute(&self, job: Job) -> io::Result<()>;
}

static DEFAULT_EXECUTOR: LazyLock<Arc<dyn Executor>> =
    LazyLock::new(|| Arc::new(ThreadExecutor::default()));

/// The executor used by [`Task::new`](super::Task::new): a shared
/// [`ThreadExecutor`] with default settings.
#[must_use]
pub fn default_executor() -> Arc<dyn Executor> {
    Arc::clone(&DEFAULT_EXECUTOR)
}

// =============================================================================
// ThreadExecutor
// =============================================================================

/// Spawns one detached OS thread per job.
///
/// # Examples
///
/// ```rust
/// use monadkit::effect::{Task, ThreadExecutor};
/// use std::sync::Arc;
///
/// let executor = Arc::new(ThreadExecutor::new().with_name_prefix("worker").with_stack_size(256 * 1024));
/// let task = Task::with_executor(executor, || std::thread::current().name().map(str::to_owned));
/// assert_eq!(task.value().unwrap().as_deref(), Some("worker-0"));
/// ```
#[derive(Debug)]
pub struct ThreadExecutor {
    name_prefix: String,
    stack_size: Option<usize>,
    spawned: AtomicUsize,
}

impl ThreadExecutor {
    /// Creates an executor with the default thread-name prefix
    /// `monadkit-task` and the platform's default stack size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name_prefix: "monadkit-task".to_string(),
            stack_size: None,
            spawned: AtomicUsize::new(0),
        }
    }

    /// Sets the prefix of worker thread names. Threads are named
    /// `{prefix}-{n}` with `n` counting from zero.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Sets the stack size of worker threads, in bytes.
    #[must_use]
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    /// Number of threads spawned so far.
    pub fn spawned(&self) -> usize {
        self.spawned.load(Ordering::Relaxed)
    }
}

impl Default for ThreadExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ThreadExecutor {
    fn execute(&self, job: Job) -> io::Result<()> {
        let index = self.spawned.fetch_add(1, Ordering::Relaxed);
        let mut builder = thread::Builder::new().name(format!("{}-{index}", self.name_prefix));
        if let Some(bytes) = self.stack_size {
            builder = builder.stack_size(bytes);
        }
        builder.spawn(job).map(drop)
    }
}

// =============================================================================
// ImmediateExecutor
// =============================================================================

/// Runs every job on the calling thread before returning.
///
/// A task built on it is already settled when its constructor returns,
/// which makes it handy in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateExecutor;

impl Executor for ImmediateExecutor {
    fn execute(&self, job: Job) -> io::Result<()> {
        job();
        Ok(())
    }
}

// =============================================================================
// TokioExecutor
// =============================================================================

/// Runs jobs with `spawn_blocking` on a Tokio runtime.
///
/// Jobs block while they wait for other tasks, so they go to the blocking
/// pool rather than the async workers.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: tokio::runtime::Handle,
}

#[cfg(feature = "async")]
impl TokioExecutor {
    /// Uses the runtime behind `handle`.
    #[must_use]
    pub const fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is running on, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

#[cfg(feature = "async")]
impl Executor for TokioExecutor {
    fn execute(&self, job: Job) -> io::Result<()> {
        drop(self.handle.spawn_blocking(job));
        Ok(())
    }
}

// =============================================================================
// RayonExecutor
// =============================================================================

/// Runs jobs on a Rayon thread pool.
#[cfg(feature = "rayon")]
#[derive(Debug, Clone, Default)]
pub struct RayonExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "rayon")]
impl RayonExecutor {
    /// Uses Rayon's global pool.
    #[must_use]
    pub const fn global() -> Self {
        Self { pool: None }
    }

    /// Uses a dedicated pool.
    #[must_use]
    pub const fn with_pool(pool: Arc<rayon::ThreadPool>) -> Self {
        Self { pool: Some(pool) }
    }
}

#[cfg(feature = "rayon")]
impl Executor for RayonExecutor {
    fn execute(&self, job: Job) -> io::Result<()> {
        match &self.pool {
            Some(pool) => pool.spawn(job),
            None => rayon::spawn(job),
        }
        Ok(())
    }
}
