//! Wait for each computation as it finishes, with manual bookkeeping.

use std::future::Future;

use futures::future::select_all;

use crate::error::ComputationFailure;

/// Launch `count` computations concurrently and deliver each result to
/// `on_result` in completion order.
///
/// Keeps an explicit working set of in-flight handles and rescans the whole
/// set every round to find the next finished one. That costs O(N) per item
/// and O(N²) overall, which is the classic inefficiency of this pattern;
/// [`as_completed`](crate::as_completed()) delivers the same ordering
/// without the rescans.
///
/// A failed computation stops the loop at the round where it is selected.
/// Results already delivered to `on_result` stand.
pub async fn each_completed<T, F, Fut, S>(
    count: u64,
    factory: F,
    mut on_result: S,
) -> Result<(), ComputationFailure>
where
    T: Send + 'static,
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<T, ComputationFailure>> + Send + 'static,
    S: FnMut(T),
{
    let mut orders: Vec<u64> = (1..=count).collect();
    let mut pending: Vec<_> = orders
        .iter()
        .map(|&order| tokio::spawn(factory(order)))
        .collect();

    while !pending.is_empty() {
        // select_all re-polls every remaining handle to find one that is
        // done: the O(N) rescan this variant is known for.
        let (finished, index, rest) = select_all(pending).await;
        // select_all extracts the finished future with swap_remove, so the
        // identifier list has to shrink the same way to stay in step.
        let order = orders.swap_remove(index);
        pending = rest;
        tracing::debug!(order, remaining = pending.len(), "computation selected");
        let value = finished.map_err(|e| ComputationFailure::new(order, e))??;
        on_result(value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::fixed_delay;

    #[tokio::test]
    async fn delivers_results_in_completion_order() {
        let mut seen = Vec::new();
        each_completed(5, |order| fixed_delay(order, (6 - order) * 50), |v| {
            seen.push(v)
        })
        .await
        .unwrap();
        assert_eq!(seen, vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn empty_batch_delivers_nothing() {
        let mut seen: Vec<u64> = Vec::new();
        each_completed(0, |order| fixed_delay(order, 10), |v| seen.push(v))
            .await
            .unwrap();
        assert!(seen.is_empty());
    }

    #[tokio::test]
    async fn stops_at_the_failed_computation() {
        let mut seen = Vec::new();
        let err = each_completed(
            5,
            |order| async move {
                let ms = [100u64, 50, 400, 150, 300][(order - 1) as usize];
                fixed_delay(order, ms).await?;
                if order == 5 {
                    Err(ComputationFailure::new(order, "injected fault"))
                } else {
                    Ok(order)
                }
            },
            |v| seen.push(v),
        )
        .await
        .unwrap_err();

        // Completion order is 2, 1, 4, then 5 fails; 3 is never selected.
        assert_eq!(seen, vec![2, 1, 4]);
        assert_eq!(err.order(), 5);
    }

    #[tokio::test]
    async fn panicked_computation_keeps_its_identifier() {
        // Identifier 1 finishes first, so the working set shrinks before
        // identifier 5 panics; the failure must still name 5.
        let mut seen = Vec::new();
        let err = each_completed(
            5,
            |order| async move {
                let ms = [10u64, 500, 500, 500, 100][(order - 1) as usize];
                fixed_delay(order, ms).await?;
                if order == 5 {
                    panic!("computation 5 blew up");
                }
                Ok(order)
            },
            |v| seen.push(v),
        )
        .await
        .unwrap_err();

        assert_eq!(seen, vec![1]);
        assert_eq!(err.order(), 5);
    }
}
