//! Wait for each computation as it finishes, as a pull-based stream.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::error::ComputationFailure;

/// A finite stream of computation outcomes in completion order.
///
/// Returned by [`as_completed`]. Each pull suspends the consumer until the
/// next computation (by completion time) has finished. An outcome is
/// unwrapped only by the consumer, so a failure surfaces at the pull that
/// reaches it, never while the stream is being built. Yields one item per
/// launched computation, then ends; not restartable.
pub struct CompletionStream<T> {
    inner: UnboundedReceiverStream<Result<T, ComputationFailure>>,
}

impl<T> Stream for CompletionStream<T> {
    type Item = Result<T, ComputationFailure>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

/// Launch `count` computations concurrently and expose their outcomes as a
/// stream ordered by completion time.
///
/// Each computation pushes its outcome onto one shared queue the moment it
/// finishes, so a pull costs O(1) amortized. No working set to rescan: the
/// bookkeeping that [`each_completed`](crate::each_completed()) does by hand
/// lives inside the queue.
pub fn as_completed<T, F, Fut>(count: u64, factory: F) -> CompletionStream<T>
where
    T: Send + 'static,
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<T, ComputationFailure>> + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    for order in 1..=count {
        let tx = tx.clone();
        // Run the computation in its own task so a panic unwinds there and
        // still reaches the queue as a failed outcome, instead of taking
        // the forwarding task (and this slot of the stream) down with it.
        let handle = tokio::spawn(factory(order));
        tokio::spawn(async move {
            let outcome = handle
                .await
                .map_err(|e| ComputationFailure::new(order, e))
                .and_then(|r| r);
            tracing::debug!(order, ok = outcome.is_ok(), "computation finished");
            // The consumer may drop the stream before draining it.
            let _ = tx.send(outcome);
        });
    }
    // Once every clone is gone the stream ends; with the original kept alive
    // it never would.
    drop(tx);

    CompletionStream {
        inner: UnboundedReceiverStream::new(rx),
    }
}
