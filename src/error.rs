//! The one failure kind a computation can surface.

use thiserror::Error;

/// A computation that finished with an error instead of a result.
///
/// Carries the launch identifier of the computation and the underlying
/// cause. Strategies construct this themselves when a spawned task panics,
/// so a join failure and an ordinary failure look the same to callers.
#[derive(Error, Debug)]
#[error("computation {order} failed: {cause}")]
pub struct ComputationFailure {
    order: u64,
    #[source]
    cause: Box<dyn std::error::Error + Send + Sync>,
}

impl ComputationFailure {
    pub fn new(order: u64, cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            order,
            cause: cause.into(),
        }
    }

    /// Launch identifier of the computation that failed.
    pub fn order(&self) -> u64 {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_computation_and_the_cause() {
        let err = ComputationFailure::new(3, "injected fault");
        assert_eq!(err.to_string(), "computation 3 failed: injected fault");
        assert_eq!(err.order(), 3);
    }

    #[test]
    fn source_chain_exposes_the_cause() {
        let err = ComputationFailure::new(1, "boom");
        let source = std::error::Error::source(&err).expect("cause should be chained");
        assert_eq!(source.to_string(), "boom");
    }
}
