//! Three ways to wait on a fixed batch of concurrent computations.
//!
//! Launch N independent delayed computations, then consume their results
//! under one of three completion disciplines:
//!
//! - [`wait_all`] — suspend once until everything is done; results in
//!   launch order.
//! - [`each_completed`] — manual working set, rescanned each round; results
//!   in completion order at O(N) per item.
//! - [`as_completed`] — pull-based completion-order stream backed by a
//!   queue; results in completion order at O(1) per item.
//!
//! Run the demo with: cargo run

pub mod as_completed;
pub mod delay;
pub mod each_completed;
pub mod error;
pub mod wait_all;

pub use as_completed::{as_completed, CompletionStream};
pub use delay::{delayed_identity, fixed_delay, DELAY_MAX_MS, DELAY_MIN_MS};
pub use each_completed::each_completed;
pub use error::ComputationFailure;
pub use wait_all::wait_all;
