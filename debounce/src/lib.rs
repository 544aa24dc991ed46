use std::time::Duration;

use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

/// Defers a value until no newer value has been set for `delay`.
///
/// Every [`Debouncer::set`] restarts the timer, so a burst of values collapses
/// into the last one. Timers run as tokio tasks and fired values are collected
/// from a channel by [`Debouncer::try_next`] or [`Debouncer::next`].
///
/// Dropping the debouncer aborts the pending timer.
pub struct Debouncer<T> {
    delay: Duration,
    tx: UnboundedSender<T>,
    rx: UnboundedReceiver<T>,
    timer: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            delay,
            tx,
            rx,
            timer: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Stage `value`, discarding whatever value is still waiting for its timer.
    ///
    /// Must be called within a tokio runtime.
    pub fn set(&mut self, value: T) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                tracing::trace!("Restarting debounce timer");
            }
            timer.abort();
        }

        let tx = self.tx.clone();
        let delay = self.delay;

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the debouncer, which aborts this task on drop.
            let _ = tx.send(value);
        }));
    }

    /// Abort the timer and forget values that fired but were not collected yet.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        while self.rx.try_recv().is_ok() {}
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// The newest value whose timer has elapsed, if any.
    pub fn try_next(&mut self) -> Option<T> {
        let mut last = None;
        while let Ok(value) = self.rx.try_recv() {
            last = Some(value);
        }
        last
    }

    /// Wait until a staged value fires.
    ///
    /// Never resolves when nothing is staged.
    pub async fn next(&mut self) -> T {
        if let Some(value) = self.try_next() {
            return value;
        }
        match self.rx.recv().await {
            Some(value) => self.try_next().unwrap_or(value),
            // The sender half is owned by `self`, the channel cannot close.
            None => std::future::pending().await,
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.timer.is_some())
            .finish_non_exhaustive()
    }
}
