//! Completion-order demo: run the three waiting strategies sequentially,
//! each over a fresh batch of five randomly-delayed computations.
//!
//! Run with: cargo run
//! (set RUST_LOG=debug for per-computation diagnostics)

use anyhow::Result;
use tokio_stream::StreamExt;

use completion_patterns::{as_completed, delayed_identity, each_completed, wait_all};

const BATCH_SIZE: u64 = 5;

/// Suspend once, print everything afterwards in launch order.
async fn demo_wait_all() -> Result<()> {
    let results = wait_all(BATCH_SIZE, delayed_identity).await?;
    for value in results {
        println!("WaitAll: Task = {}", value);
    }
    Ok(())
}

/// Print each result the moment its computation is picked out of the
/// shrinking working set.
async fn demo_each_completed() -> Result<()> {
    each_completed(BATCH_SIZE, delayed_identity, |value| {
        println!("EachCompleted: Task = {}", value);
    })
    .await?;
    Ok(())
}

/// Print each result as it is pulled from the completion-order stream.
async fn demo_as_completed() -> Result<()> {
    let mut completions = as_completed(BATCH_SIZE, delayed_identity);
    while let Some(outcome) = completions.next().await {
        println!("AsCompleted: Task = {}", outcome?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    demo_wait_all().await?;
    demo_each_completed().await?;
    demo_as_completed().await?;
    Ok(())
}
