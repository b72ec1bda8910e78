//! Ctrl+C handling for in-flight graph queries.
//!
//! Responsibilities:
//! - Provide a cloneable token the signal task flips once.
//! - Race a query against the token and surface a recognizable `Cancelled` error.
//!
//! Does NOT handle:
//! - Installing the signal handler (see `main`).
//!
//! Invariants:
//! - Once cancelled, a token stays cancelled.
//! - A cancelled query exits with 130 (128 + SIGINT).

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

/// Cancellation token shared between the signal task and the running command.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    state: Arc<watch::Sender<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
        }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.state.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolve once cancellation has been requested.
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Run `fut` unless cancellation wins the race.
    pub async fn run<F, T>(&self, fut: F) -> anyhow::Result<T>
    where
        F: Future<Output = T>,
    {
        tokio::select! {
            value = fut => Ok(value),
            _ = self.cancelled() => Err(Cancelled.into()),
        }
    }
}

/// Marker error for user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

pub fn print_cancelled_message() {
    eprintln!("^C\nQuery cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes_when_not_cancelled() {
        let token = CancellationToken::new();
        let value = token.run(async { 7 }).await.unwrap();
        assert_eq!(value, 7);
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_run_returns_cancelled_after_cancel() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();

        let err = token
            .run(std::future::pending::<()>())
            .await
            .unwrap_err();
        assert!(is_cancelled_error(&err));
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_clone_observes_cancel() {
        let token = CancellationToken::new();
        let clone = token.clone();
        let waiter = tokio::spawn(async move { clone.cancelled().await });
        token.cancel();
        waiter.await.unwrap();
    }
}
