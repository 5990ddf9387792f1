//! Future types for digests computed on a tokio task

use crate::{Digest, HashError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Pending digest from [`crate::Hasher::compute`]
pub struct AsyncDigestResult {
    receiver: oneshot::Receiver<Result<Digest>>,
}

/// Pending digest routed through a caller-supplied result handler
pub struct AsyncDigestResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<Digest>>,
    handler: Option<F>,
}

impl AsyncDigestResult {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<Digest>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncDigestResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<Digest>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Resolve through `handler`, which receives the result exactly once
    pub fn on_result<F, T>(self, handler: F) -> AsyncDigestResultWithHandler<F>
    where
        F: FnOnce(Result<Digest>) -> T,
    {
        AsyncDigestResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
        }
    }
}

fn task_dropped() -> HashError {
    HashError::internal("Hash computation task dropped")
}

impl Future for AsyncDigestResult {
    type Output = Result<Digest>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(task_dropped())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for AsyncDigestResultWithHandler<F>
where
    F: FnOnce(Result<Digest>) -> T + Unpin,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Already completed: the receiver must not be polled again
        let Some(handler) = this.handler.take() else {
            return Poll::Pending;
        };

        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(handler(result)),
            Poll::Ready(Err(_)) => Poll::Ready(handler(Err(task_dropped()))),
            Poll::Pending => {
                this.handler = Some(handler);
                Poll::Pending
            }
        }
    }
}
