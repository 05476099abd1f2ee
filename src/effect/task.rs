//! Task - a computation running on a worker, observed by blocking.
//!
//! Building a [`Task`] starts the computation immediately on an
//! [`Executor`]. The task settles exactly once, with the computation's value
//! or the [`Fault`] it raised; every observer sees that same outcome.
//!
//! `Task` is a cheap handle: clones share one settlement.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Fault;
//! use monadkit::effect::Task;
//!
//! let task = Task::new(|| 2);
//! assert_eq!(task.value(), Ok(2));
//!
//! let failing: Task<i32> = Task::new(|| panic!("worker failed"));
//! assert_eq!(failing.value(), Err(Fault::Panicked("worker failed".to_string())));
//! ```

use std::fmt;
use std::result::Result as StdResult;
use std::sync::{Arc, OnceLock};

use parking_lot::{Condvar, Mutex};

use super::executor::{Executor, Job, default_executor};
use crate::control::{Fault, Maybe, Result, Try};

type Callback<T> = Box<dyn FnOnce(&Try<T, Fault>) + Send>;

/// The write-once outcome shared by every handle of one task.
struct Settlement<T> {
    outcome: OnceLock<Try<T, Fault>>,
    pending: Mutex<Vec<Callback<T>>>,
    settled: Condvar,
}

impl<T> Settlement<T> {
    fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
            pending: Mutex::new(Vec::new()),
            settled: Condvar::new(),
        }
    }

    fn settled(outcome: Try<T, Fault>) -> Self {
        Self {
            outcome: OnceLock::from(outcome),
            pending: Mutex::new(Vec::new()),
            settled: Condvar::new(),
        }
    }

    /// First settlement wins; later calls return `false`.
    fn settle(&self, outcome: Try<T, Fault>) -> bool {
        let callbacks = {
            let mut pending = self.pending.lock();
            if self.outcome.set(outcome).is_err() {
                return false;
            }
            self.settled.notify_all();
            std::mem::take(&mut *pending)
        };
        if let Some(outcome) = self.outcome.get() {
            for callback in callbacks {
                callback(outcome);
            }
        }
        true
    }

    /// Runs `callback` with the outcome, now if settled, otherwise right
    /// after settlement on the settling thread.
    fn on_settle(&self, callback: Callback<T>) {
        let mut pending = self.pending.lock();
        match self.outcome.get() {
            Some(outcome) => {
                drop(pending);
                callback(outcome);
            }
            None => pending.push(callback),
        }
    }

    fn wait(&self) -> &Try<T, Fault> {
        if let Some(outcome) = self.outcome.get() {
            return outcome;
        }
        let mut pending = self.pending.lock();
        loop {
            if let Some(outcome) = self.outcome.get() {
                return outcome;
            }
            self.settled.wait(&mut pending);
        }
    }
}

/// Settles its task with [`Fault::Abandoned`] unless completed first.
struct Completion<T> {
    settlement: Option<Arc<Settlement<T>>>,
}

impl<T> Completion<T> {
    fn complete(mut self, outcome: Try<T, Fault>) {
        if let Some(settlement) = self.settlement.take() {
            if let Try::Error(fault) = &outcome {
                tracing::debug!(%fault, "task faulted");
            } else {
                tracing::trace!("task settled");
            }
            settlement.settle(outcome);
        }
    }
}

impl<T> Drop for Completion<T> {
    fn drop(&mut self) {
        if let Some(settlement) = self.settlement.take() {
            tracing::warn!("task dropped before it ran");
            settlement.settle(Try::Error(Fault::Abandoned));
        }
    }
}

/// Hands `computation` to `executor`; its outcome settles `completion`.
fn dispatch<T, F>(executor: &dyn Executor, completion: Completion<T>, computation: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Try<T, Fault> + Send + 'static,
{
    let job: Job = Box::new(move || completion.complete(computation()));
    tracing::trace!("spawning task");
    if let Err(error) = executor.execute(job) {
        tracing::warn!(%error, "executor rejected task");
    }
}

/// A handle to a computation running on an executor.
pub struct Task<T> {
    settlement: Arc<Settlement<T>>,
    executor: Arc<dyn Executor>,
}

impl<T> Clone for Task<T> {
    fn clone(&self) -> Self {
        Self {
            settlement: Arc::clone(&self.settlement),
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<T: Send + Sync + 'static> Task<T> {
    /// Starts `computation` on the default executor.
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::with_executor(default_executor(), computation)
    }

    /// Starts `computation` on `executor`. Continuations built with
    /// [`fmap`](Self::fmap) and [`bind`](Self::bind) run there too.
    pub fn with_executor<F>(executor: Arc<dyn Executor>, computation: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::start(executor, move || Fault::capture(computation))
    }

    /// Starts a computation that reports errors through `Err`; an error
    /// settles the task with [`Fault::Raised`].
    pub fn fallible<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> StdResult<T, E> + Send + 'static,
        E: fmt::Display,
    {
        Self::fallible_with_executor(default_executor(), computation)
    }

    /// [`fallible`](Self::fallible) on a chosen executor.
    pub fn fallible_with_executor<F, E>(executor: Arc<dyn Executor>, computation: F) -> Self
    where
        F: FnOnce() -> StdResult<T, E> + Send + 'static,
        E: fmt::Display,
    {
        Self::start(executor, move || {
            Fault::capture(computation).bind(|outcome| match outcome {
                Ok(value) => Try::Value(value),
                Err(error) => Try::Error(Fault::raised(error)),
            })
        })
    }

    /// A task already settled with `value`.
    pub fn pure(value: T) -> Self {
        Self::settled(Try::Value(value))
    }

    /// A task already settled with `fault`.
    pub fn failed(fault: Fault) -> Self {
        Self::settled(Try::Error(fault))
    }

    fn settled(outcome: Try<T, Fault>) -> Self {
        Self {
            settlement: Arc::new(Settlement::settled(outcome)),
            executor: default_executor(),
        }
    }

    fn start<F>(executor: Arc<dyn Executor>, computation: F) -> Self
    where
        F: FnOnce() -> Try<T, Fault> + Send + 'static,
    {
        let (task, completion) = Self::pending(executor);
        dispatch(&*task.executor, completion, computation);
        task
    }

    fn pending(executor: Arc<dyn Executor>) -> (Self, Completion<T>) {
        let settlement = Arc::new(Settlement::new());
        let completion = Completion {
            settlement: Some(Arc::clone(&settlement)),
        };
        (Self { settlement, executor }, completion)
    }
}

impl<T> Task<T> {
    /// Blocks until the task settles and borrows the outcome.
    pub fn wait(&self) -> &Try<T, Fault> {
        self.settlement.wait()
    }

    /// Returns `true` once the task has settled. Never blocks.
    pub fn is_settled(&self) -> bool {
        self.settlement.outcome.get().is_some()
    }

    /// Blocks and returns a copy of the value.
    ///
    /// # Errors
    ///
    /// Returns the captured fault when the computation failed.
    pub fn value(&self) -> StdResult<T, Fault>
    where
        T: Clone,
    {
        self.wait().clone().into_std()
    }

    /// Blocks and returns the value, re-raising a captured fault on the
    /// calling thread.
    ///
    /// # Panics
    ///
    /// Unwinds through [`Fault::raise`]: a typed payload the computation
    /// panicked with is handed back as that type, any other fault unwinds
    /// with the [`Fault`] itself. Every call on a failed task re-raises.
    pub fn unwrap(&self) -> T
    where
        T: Clone,
    {
        match self.value() {
            Ok(value) => value,
            Err(fault) => fault.raise(),
        }
    }

    /// Blocks and returns the value, or `default` when the task failed.
    pub fn or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.value().unwrap_or(default)
    }

    /// Blocks and converts: a value becomes `Some`, a fault `None`.
    pub fn to_maybe(&self) -> Maybe<T>
    where
        T: Clone,
    {
        self.wait().clone().to_maybe()
    }

    /// Blocks and converts: a value becomes `Success`, a fault
    /// `Failure(fault)`.
    pub fn to_result(&self) -> Result<T, Fault>
    where
        T: Clone,
    {
        self.wait().clone().to_result()
    }
}

impl<T: Clone + Send + Sync + 'static> Task<T> {
    /// A task that applies `function` to this task's value once it
    /// settles. A fault is carried over without running `function`.
    ///
    /// Does not block.
    pub fn fmap<U, F>(&self, function: F) -> Task<U>
    where
        U: Send + Sync + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let (task, completion) = Task::pending(Arc::clone(&self.executor));
        let executor = Arc::clone(&self.executor);
        self.settlement.on_settle(Box::new(move |outcome: &Try<T, Fault>| match outcome {
            Try::Value(value) => {
                let value = value.clone();
                dispatch(&*executor, completion, move || Fault::capture(|| function(value)));
            }
            Try::Error(fault) => completion.complete(Try::Error(fault.clone())),
        }));
        task
    }

    /// A task that runs `function` on this task's value and then follows
    /// the task it returns.
    ///
    /// Does not block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::Task;
    ///
    /// let chained = Task::new(|| 20).bind(|n| Task::new(move || n + 1)).fmap(|n| n * 2);
    /// assert_eq!(chained.value(), Ok(42));
    /// ```
    pub fn bind<U, F>(&self, function: F) -> Task<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> Task<U> + Send + 'static,
    {
        let (task, completion) = Task::pending(Arc::clone(&self.executor));
        let executor = Arc::clone(&self.executor);
        self.settlement.on_settle(Box::new(move |outcome: &Try<T, Fault>| match outcome {
            Try::Value(value) => {
                let value = value.clone();
                let job: Job = Box::new(move || match Fault::capture(|| function(value)) {
                    Try::Value(next) => next
                        .settlement
                        .on_settle(Box::new(move |outcome: &Try<U, Fault>| {
                            completion.complete(outcome.clone());
                        })),
                    Try::Error(fault) => completion.complete(Try::Error(fault)),
                });
                if let Err(error) = executor.execute(job) {
                    tracing::warn!(%error, "executor rejected task");
                }
            }
            Try::Error(fault) => completion.complete(Try::Error(fault.clone())),
        }));
        task
    }
}

impl<T: fmt::Debug> fmt::Debug for Task<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.settlement.outcome.get() {
            Some(outcome) => formatter.debug_tuple("Task").field(outcome).finish(),
            None => formatter.write_str("Task(<pending>)"),
        }
    }
}

#[cfg(feature = "compose")]
impl<T: Clone> crate::compose::ToMonad for Task<T> {
    type Monad = Try<T, Fault>;

    /// Blocks until the task settles.
    fn to_monad(self) -> Try<T, Fault> {
        self.wait().clone()
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Task<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::ImmediateExecutor;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    fn immediate() -> Arc<dyn Executor> {
        Arc::new(ImmediateExecutor)
    }

    #[rstest]
    fn construction_starts_the_worker() {
        let (sender, receiver) = mpsc::channel();
        let task = Task::new(move || sender.send(()).is_ok());
        receiver.recv().unwrap();
        assert_eq!(task.value(), Ok(true));
    }

    #[rstest]
    fn immediate_executor_settles_before_returning() {
        let task = Task::with_executor(immediate(), || 5);
        assert!(task.is_settled());
        assert_eq!(task.wait(), &Try::Value(5));
    }

    #[rstest]
    fn unwrap_reraises_fault_every_time() {
        let task: Task<i32> = Task::with_executor(immediate(), || panic!("broken"));
        for _ in 0..2 {
            let payload = catch_unwind(AssertUnwindSafe(|| task.unwrap())).unwrap_err();
            assert_eq!(Fault::from_panic(payload), Fault::Panicked("broken".to_string()));
        }
    }

    #[rstest]
    fn unwrap_hands_back_typed_payload() {
        #[derive(Debug, PartialEq)]
        struct Timeout;

        let task: Task<i32> =
            Task::with_executor(immediate(), || std::panic::panic_any(Timeout));
        assert!(matches!(task.value(), Err(Fault::Thrown(ref thrown)) if thrown.is::<Timeout>()));

        let payload = catch_unwind(AssertUnwindSafe(|| task.unwrap())).unwrap_err();
        assert_eq!(payload.downcast_ref::<Timeout>(), Some(&Timeout));
    }

    #[rstest]
    fn fallible_error_is_raised_fault() {
        let task: Task<i32> = Task::fallible(|| "x".parse::<i32>());
        assert!(matches!(task.value(), Err(Fault::Raised(_))));
    }

    #[rstest]
    fn fallible_runs_on_chosen_executor() {
        let task: Task<i32> = Task::fallible_with_executor(immediate(), || "7".parse::<i32>());
        assert!(task.is_settled());
        assert_eq!(task.value(), Ok(7));
    }

    #[rstest]
    fn fmap_skips_function_on_fault() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mapped = Task::<i32>::failed(Fault::raised("down")).fmap(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n + 1
        });
        assert_eq!(mapped.to_result(), Result::failure(Fault::Raised("down".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn fmap_runs_on_same_executor() {
        let mapped = Task::with_executor(immediate(), || 2).fmap(|n| n * 10);
        assert!(mapped.is_settled());
        assert_eq!(mapped.value(), Ok(20));
    }

    #[rstest]
    fn bind_follows_inner_task() {
        let chained = Task::pure(3).bind(|n| Task::new(move || n * 3));
        assert_eq!(chained.value(), Ok(9));
    }

    #[rstest]
    fn clones_share_one_settlement() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let task = Task::new(move || counter.fetch_add(1, Ordering::SeqCst));
        let clone = task.clone();
        assert_eq!(task.value(), clone.value());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn or_and_to_maybe() {
        let failed = Task::<i32>::failed(Fault::Abandoned);
        assert_eq!(failed.or(4), 4);
        assert_eq!(failed.to_maybe(), Maybe::None);
        assert_eq!(Task::pure(1).to_maybe(), Maybe::some(1));
    }

    #[rstest]
    fn rendering_shows_outcome() {
        assert_eq!(format!("{:?}", Task::pure(1)), "Task(Value(1))");
    }
}
