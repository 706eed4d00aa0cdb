//! Simulated variable-latency work.

use std::time::Duration;

use rand::Rng;

use crate::error::ComputationFailure;

/// Inclusive lower bound of the simulated delay, in milliseconds.
pub const DELAY_MIN_MS: u64 = 500;

/// Exclusive upper bound of the simulated delay, in milliseconds.
pub const DELAY_MAX_MS: u64 = 4000;

/// Suspend for a uniformly random duration in
/// `[DELAY_MIN_MS, DELAY_MAX_MS)`, then yield `order` unchanged.
///
/// The sleep suspends the task without blocking the worker thread. Delays
/// come from the thread-local generator, which stays properly seeded across
/// rapid successive launches.
pub async fn delayed_identity(order: u64) -> Result<u64, ComputationFailure> {
    let ms = random_delay_ms();
    tracing::debug!(order, delay_ms = ms, "computation launched");
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tracing::debug!(order, "computation finished");
    Ok(order)
}

/// Same shape as [`delayed_identity`] with a caller-chosen delay, for
/// scenarios that need deterministic completion orderings.
pub async fn fixed_delay(order: u64, ms: u64) -> Result<u64, ComputationFailure> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    Ok(order)
}

fn random_delay_ms() -> u64 {
    rand::thread_rng().gen_range(DELAY_MIN_MS..DELAY_MAX_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_delay_stays_in_bounds() {
        for _ in 0..1_000 {
            let ms = random_delay_ms();
            assert!((DELAY_MIN_MS..DELAY_MAX_MS).contains(&ms), "got {}", ms);
        }
    }

    #[tokio::test]
    async fn fixed_delay_yields_its_identifier() {
        assert_eq!(fixed_delay(7, 1).await.unwrap(), 7);
    }
}
