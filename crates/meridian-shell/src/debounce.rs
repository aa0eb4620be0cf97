//! Generic value debouncing with cancellation.
//!
//! A [`Debouncer`] turns a rapidly-updating input into at most one
//! emission per pause: each [`update`](Debouncer::update) restarts the
//! timer, discarding the previously pending value, and the latest value
//! is emitted only once the input has been quiet for the full delay.
//! Dropping the debouncer cancels any pending emission; nothing fires
//! after teardown.
//!
//! The primitive has no domain knowledge; the search controller feeds it
//! query text, but any controller can feed it anything.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Timer-based value stabilizer.
///
/// Must be updated from within a Tokio runtime: each update spawns the
/// timer task that performs the eventual emission.
pub struct Debouncer<T> {
    delay: Duration,
    emit: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<CancellationToken>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that calls `emit` with the stabilized value.
    pub fn new(delay: Duration, emit: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            emit: Arc::new(emit),
            pending: None,
        }
    }

    /// Feed a new input value, restarting the stabilization timer.
    ///
    /// Any value still waiting out the previous timer is discarded; only
    /// this value will emit, and only if no further update arrives within
    /// the delay.
    pub fn update(&mut self, value: T) {
        self.cancel();

        let cancel = CancellationToken::new();
        self.pending = Some(cancel.clone());

        let emit = Arc::clone(&self.emit);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = sleep(delay) => emit(value),
            }
        });
    }

    /// Cancel any pending emission.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}
