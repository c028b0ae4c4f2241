use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::services::llm::LlmError;

/// Deadline and cancellation signal for a single generation request.
#[derive(Clone, Debug)]
pub struct RequestContext {
    deadline: Instant,
    timeout: Duration,
    cancel: watch::Receiver<bool>,
}

/// Cancels every clone of the [`RequestContext`] it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl RequestContext {
    /// A context that can only expire, never be cancelled explicitly.
    pub fn new(timeout: Duration) -> Self {
        let (ctx, _handle) = Self::with_cancel(timeout);
        ctx
    }

    pub fn with_cancel(timeout: Duration) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            deadline: Instant::now() + timeout,
            timeout,
            cancel: rx,
        };
        (ctx, CancelHandle { tx })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    /// Resolves once the context is cancelled. Never resolves if the handle is dropped first.
    pub async fn cancelled(&self) {
        let mut rx = self.cancel.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Runs `fut` until it completes, the deadline passes, or the context is cancelled.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, LlmError>
    where
        F: Future<Output = T>,
    {
        if self.is_cancelled() {
            return Err(LlmError::Canceled);
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(LlmError::Canceled),
            _ = tokio::time::sleep_until(self.deadline) => Err(LlmError::Timeout(self.timeout)),
            output = fut => Ok(output),
        }
    }
}
