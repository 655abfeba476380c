use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutorError {
    #[error("I/O executor queue is full")]
    Saturated,

    #[error("I/O executor has shut down")]
    Shutdown,

    #[error("Job was dropped before producing a result")]
    Dropped,
}

/// Handle to the eventual result of a job submitted to the
/// [`IoExecutor`](super::IoExecutor).
///
/// Await it to get the result. Dropping it cancels interest: a job whose
/// handle is gone by the time a worker picks it up is skipped.
#[must_use = "a deferred result does nothing unless awaited"]
pub struct Deferred<T> {
    inner: Inner<T>,
}

enum Inner<T> {
    Pending(oneshot::Receiver<T>),
    Failed(Option<ExecutorError>),
}

impl<T> Deferred<T> {
    pub(crate) fn pending(receiver: oneshot::Receiver<T>) -> Self {
        Deferred {
            inner: Inner::Pending(receiver),
        }
    }

    pub(crate) fn failed(error: ExecutorError) -> Self {
        Deferred {
            inner: Inner::Failed(Some(error)),
        }
    }
}

impl<T> Unpin for Deferred<T> {}

impl<T> Future for Deferred<T> {
    type Output = Result<T, ExecutorError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().inner {
            Inner::Pending(receiver) => Pin::new(receiver)
                .poll(cx)
                .map(|result| result.map_err(|_| ExecutorError::Dropped)),
            Inner::Failed(error) => {
                Poll::Ready(Err(error.take().unwrap_or(ExecutorError::Dropped)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_resolves_with_sent_value() {
        let (tx, rx) = oneshot::channel();
        let deferred = Deferred::pending(rx);
        tx.send(42).unwrap();

        assert_eq!(deferred.await, Ok(42));
    }

    #[tokio::test]
    async fn test_dropped_sender_resolves_to_dropped() {
        let (tx, rx) = oneshot::channel::<u32>();
        drop(tx);

        assert_eq!(Deferred::pending(rx).await, Err(ExecutorError::Dropped));
    }

    #[tokio::test]
    async fn test_failed_resolves_immediately() {
        let deferred = Deferred::<u32>::failed(ExecutorError::Saturated);
        assert_eq!(deferred.await, Err(ExecutorError::Saturated));
    }
}
