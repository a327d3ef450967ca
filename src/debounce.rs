//! Debouncing: collapse bursts of triggers into one delayed invocation.
//!
//! Each [`Debounced::trigger`] aborts the pending timer task, if any, and
//! schedules a new one. When a timer elapses the action is spawned as its
//! own task, so a later trigger never cancels an invocation that has
//! already started.
//!
//! Triggers must be issued from within a tokio runtime.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// A debounced action taking arguments of type `T`.
pub struct Debounced<T, F> {
    action: Arc<F>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    _args: std::marker::PhantomData<fn(T)>,
}

/// Wraps `action` so that it runs once per quiescent period of `delay`,
/// with the arguments of the last trigger.
pub fn debounce<T, F, Fut>(action: F, delay: Duration) -> Debounced<T, F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Debounced {
        action: Arc::new(action),
        delay,
        pending: Mutex::new(None),
        _args: std::marker::PhantomData,
    }
}

impl<T, F, Fut> Debounced<T, F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    /// Reschedules the action `delay` from now with `args`.
    pub fn trigger(&self, args: T) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn((*action)(args));
        }));
    }
}

impl<T, F> Debounced<T, F> {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Drops the scheduled invocation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}

impl<T, F> Drop for Debounced<T, F> {
    fn drop(&mut self) {
        self.cancel();
    }
}
