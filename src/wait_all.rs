//! Wait for the whole batch at once: results come back in launch order.

use std::future::Future;

use futures::future::try_join_all;

use crate::error::ComputationFailure;

/// Launch `count` computations concurrently and suspend until every one has
/// finished, failing fast on the first error.
///
/// `factory` is invoked with identifiers `1..=count` before the first
/// suspension, so the whole batch runs from the moment of the call. On
/// success, index `i` holds the result of `factory(i + 1)` no matter which
/// computation actually finished first. On failure the first observed error
/// is returned immediately; computations still in flight are detached and
/// their results discarded.
pub async fn wait_all<T, F, Fut>(count: u64, factory: F) -> Result<Vec<T>, ComputationFailure>
where
    T: Send + 'static,
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<T, ComputationFailure>> + Send + 'static,
{
    let handles: Vec<_> = (1..=count)
        .map(|order| (order, tokio::spawn(factory(order))))
        .collect();

    // Flatten the join layer so a panicked task surfaces as the same error
    // kind as an ordinary failure.
    try_join_all(handles.into_iter().map(|(order, handle)| async move {
        handle
            .await
            .map_err(|e| ComputationFailure::new(order, e))?
    }))
    .await
}
