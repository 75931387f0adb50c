//! Trailing-edge debouncer on top of tokio timers
//!
//! Coalesces rapid successive calls into one delayed call that carries the
//! arguments of the most recent call.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

type ActionFuture = Pin<Box<dyn Future<Output = ()> + Send>>;
type BoxedAction<T> = Arc<dyn Fn(T) -> ActionFuture + Send + Sync>;

/// Debounced wrapper around an action
///
/// Holds at most one scheduled invocation. Each call to [`invoke`](Self::invoke)
/// cancels the scheduled one (if it has not fired yet) and schedules a new one
/// `delay` after the call. Superseded arguments are dropped.
///
/// When the timer fires, the action is called and the future it returns is
/// spawned as its own task. Later invocations never cancel an action that
/// has already started, and an action still running does not block new
/// invocations from being scheduled.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<T> {
    /// Wrapped action
    action: BoxedAction<T>,

    /// Quiet period before the action fires
    delay: Duration,

    /// Timer task for the scheduled invocation
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    /// Wrap `action` so that it only fires after `delay` of silence
    pub fn new<F, Fut>(delay: Duration, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let action: BoxedAction<T> = Arc::new(move |args: T| -> ActionFuture {
            Box::pin(action(args))
        });

        Self {
            action,
            delay,
            pending: None,
        }
    }

    /// Same as [`new`](Self::new) with the delay given in milliseconds
    pub fn from_millis<F, Fut>(delay_ms: u64, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::new(Duration::from_millis(delay_ms), action)
    }

    /// Schedule the action with `args`, replacing any scheduled invocation
    ///
    /// Returns immediately. The deadline is fixed here, so a timer task that
    /// is polled late still fires `delay` after this call. A delay past the
    /// clock's range never fires.
    pub fn invoke(&mut self, args: T) {
        if let Some(previous) = self.pending.take() {
            if !previous.is_finished() {
                trace!("Superseding scheduled invocation");
            }
            previous.abort();
        }

        let timer = tokio::time::sleep(self.delay);
        let action = Arc::clone(&self.action);

        self.pending = Some(tokio::spawn(async move {
            timer.await;
            debug!("Quiet period elapsed, firing action");
            tokio::spawn(action(args));
        }));
    }

    /// Quiet period configured at construction
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an invocation is scheduled and has not fired yet
    ///
    /// A timer whose action panicked counts as fired.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field(
                "pending",
                &self.pending.as_ref().is_some_and(|h| !h.is_finished()),
            )
            .finish()
    }
}
