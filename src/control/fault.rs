//! Captured runtime faults.
//!
//! [`Lazy`](super::Lazy) and [`Task`](crate::effect::Task) run arbitrary
//! closures; a panic inside one of them is caught and stored as a [`Fault`]
//! instead of tearing down the thread that observes it.
//!
//! A panic whose payload is neither a message nor a `Fault` is kept as a
//! [`Thrown`] so that [`Fault::raise`] can hand the original object back to
//! the caller.

use std::any::{Any, TypeId};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

use super::Try;

type Replay = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// A typed panic payload held inside a [`Fault`].
///
/// Clones share the payload. A payload thrown with [`Fault::throw`] can be
/// re-raised any number of times; one captured from a plain
/// `std::panic::panic_any` is handed back by the first re-raise only, later
/// re-raises unwind with the `Fault` itself.
#[derive(Clone)]
pub struct Thrown {
    type_id: TypeId,
    original: Arc<Mutex<Option<Box<dyn Any + Send>>>>,
    replay: Option<Replay>,
}

impl Thrown {
    fn captured(payload: Box<dyn Any + Send>) -> Self {
        Self {
            type_id: (*payload).type_id(),
            original: Arc::new(Mutex::new(Some(payload))),
            replay: None,
        }
    }

    fn replayable<E>(error: E) -> Self
    where
        E: Any + Clone + Send + Sync,
    {
        Self {
            type_id: TypeId::of::<E>(),
            original: Arc::new(Mutex::new(None)),
            replay: Some(Arc::new(move || Box::new(error.clone()))),
        }
    }

    /// Returns `true` when the payload is an `E`.
    pub fn is<E: Any>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }

    /// Runs `inspect` on the payload when it is an `E` and still held.
    pub fn with<E: Any, R>(&self, inspect: impl FnOnce(&E) -> R) -> Option<R> {
        if let Some(replay) = &self.replay {
            return replay().downcast_ref::<E>().map(inspect);
        }
        self.original
            .lock()
            .as_ref()
            .and_then(|payload| payload.downcast_ref::<E>())
            .map(inspect)
    }

    fn payload(&self) -> Option<Box<dyn Any + Send>> {
        match &self.replay {
            Some(replay) => Some(replay()),
            None => self.original.lock().take(),
        }
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Thrown")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a non-string panic payload")
    }
}

impl PartialEq for Thrown {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.original, &other.original)
    }
}

impl Eq for Thrown {}

/// A fault raised by a deferred computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    /// The computation panicked with a message.
    #[error("computation panicked: {0}")]
    Panicked(String),
    /// The computation reported an error value.
    #[error("{0}")]
    Raised(String),
    /// The computation panicked with a typed payload.
    #[error("computation raised {0}")]
    Thrown(Thrown),
    /// The computation was dropped before it ran, for example because its
    /// executor could not start a worker.
    #[error("computation was abandoned before it settled")]
    Abandoned,
}

impl Fault {
    /// Builds a [`Fault::Raised`] from any displayable error.
    pub fn raised(error: impl fmt::Display) -> Self {
        Self::Raised(error.to_string())
    }

    /// Converts a panic payload into a fault.
    ///
    /// A payload that already is a `Fault` is returned as is, which lets a
    /// fault cross several nested `catch_unwind` boundaries unchanged.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Self::Panicked((*message).to_string()),
            Err(payload) => payload,
        };
        match payload.downcast::<String>() {
            Ok(message) => Self::Panicked(*message),
            Err(payload) => Self::Thrown(Thrown::captured(payload)),
        }
    }

    /// Runs `computation`, capturing any panic as a fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{Fault, Try};
    ///
    /// assert_eq!(Fault::capture(|| 2 + 2), Try::Value(4));
    /// assert!(Fault::capture(|| -> i32 { panic!("boom") }).is_error());
    /// ```
    pub fn capture<T, F>(computation: F) -> Try<T, Self>
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Try::Value(value),
            Err(payload) => Try::Error(Self::from_panic(payload)),
        }
    }

    /// Unwinds the current thread with `error` as the payload, without
    /// invoking the panic hook.
    ///
    /// Once captured, the fault re-raises a fresh clone of `error` every
    /// time [`raise`](Self::raise) is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Fault;
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Timeout;
    ///
    /// let fault = Fault::capture(|| -> i32 { Fault::throw(Timeout) }).into_std().unwrap_err();
    /// for _ in 0..2 {
    ///     let payload = catch_unwind(AssertUnwindSafe(|| fault.clone().raise())).unwrap_err();
    ///     assert_eq!(payload.downcast_ref::<Timeout>(), Some(&Timeout));
    /// }
    /// ```
    pub fn throw<E>(error: E) -> !
    where
        E: Any + Clone + Send + Sync,
    {
        Self::Thrown(Thrown::replayable(error)).propagate()
    }

    /// Unwinds the current thread with this fault, without invoking the
    /// panic hook.
    ///
    /// A [`Fault::Thrown`] unwinds with the payload the computation raised,
    /// so the caller can downcast it to its own type. Every other fault
    /// unwinds with itself as the payload; recover it with
    /// [`Fault::from_panic`].
    pub fn raise(self) -> ! {
        if let Self::Thrown(thrown) = &self
            && let Some(payload) = thrown.payload()
        {
            panic::resume_unwind(payload)
        }
        self.propagate()
    }

    /// Unwinds with the fault itself, so an enclosing [`Fault::capture`]
    /// recovers it unchanged.
    pub(crate) fn propagate(self) -> ! {
        panic::resume_unwind(Box::new(self))
    }
}

static_assertions::assert_impl_all!(Fault: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{catch_unwind, panic_any};

    #[derive(Debug, Clone, PartialEq)]
    struct Timeout;

    #[rstest]
    fn string_payloads_become_panicked() {
        let payload = catch_unwind(|| -> i32 { panic!("boom {}", 1) }).unwrap_err();
        assert_eq!(Fault::from_panic(payload), Fault::Panicked("boom 1".to_string()));

        let payload = catch_unwind(|| -> i32 { panic!("static") }).unwrap_err();
        assert_eq!(Fault::from_panic(payload), Fault::Panicked("static".to_string()));
    }

    #[rstest]
    fn raised_fault_survives_unwinding() {
        let payload = catch_unwind(|| -> i32 { Fault::raised("disk full").raise() }).unwrap_err();
        assert_eq!(Fault::from_panic(payload), Fault::Raised("disk full".to_string()));
    }

    #[rstest]
    fn typed_payload_is_kept() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        let fault = Fault::from_panic(payload);
        let Fault::Thrown(thrown) = &fault else {
            panic!("expected a thrown payload, got {fault:?}");
        };
        assert!(thrown.is::<u8>());
        assert_eq!(thrown.with(|value: &u8| *value), Some(42));
        assert_eq!(fault.to_string(), "computation raised a non-string panic payload");
    }

    #[rstest]
    fn captured_payload_is_handed_back_on_raise() {
        let fault = Fault::capture(|| -> i32 { panic_any(Timeout) }).into_std().unwrap_err();
        let payload = catch_unwind(AssertUnwindSafe(|| fault.clone().raise())).unwrap_err();
        assert_eq!(payload.downcast_ref::<Timeout>(), Some(&Timeout));

        let again = catch_unwind(AssertUnwindSafe(|| fault.clone().raise())).unwrap_err();
        assert_eq!(Fault::from_panic(again), fault);
    }

    #[rstest]
    fn thrown_payload_replays_on_every_raise() {
        let fault = Fault::capture(|| -> i32 { Fault::throw(Timeout) }).into_std().unwrap_err();
        for _ in 0..3 {
            let payload = catch_unwind(AssertUnwindSafe(|| fault.clone().raise())).unwrap_err();
            assert!(payload.is::<Timeout>());
        }
    }
}
