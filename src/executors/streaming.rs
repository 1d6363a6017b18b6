//! src/executors/streaming.rs
use crate::counter::count_words;
use crate::counts::{aggregate, merge, WordCounts};
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Runs `workers` tasks fed from one shared input channel.
///
/// Every input is delivered to exactly one worker; workers keep pulling
/// until the feed closes, accumulating into a private local map. Feeding
/// overlaps consumption: the channel is bounded, so the distributor hands
/// out inputs while earlier ones are still being counted.
///
/// Callers guarantee `workers >= 1`; the engine entry points clamp.
#[tracing::instrument(name = "Streaming executor", skip(inputs), fields(inputs = inputs.len()))]
pub async fn run_streaming(workers: usize, inputs: Vec<String>) -> Result<WordCounts, anyhow::Error> {
    let (feed_tx, feed_rx) = mpsc::channel::<String>(workers);
    let feed_rx = Arc::new(Mutex::new(feed_rx));

    let mut handles = Vec::with_capacity(workers);
    for worker_idx in 0..workers {
        let feed_rx = Arc::clone(&feed_rx);
        handles.push(tokio::spawn(async move {
            let mut local = WordCounts::new();
            loop {
                // Hold the lock only while taking the next input, not
                // while counting it.
                let next = { feed_rx.lock().await.recv().await };
                match next {
                    Some(input) => merge(&mut local, count_words(&input)),
                    None => break,
                }
            }
            tracing::debug!(worker_idx, distinct_words = local.len(), "feed exhausted");
            local
        }));
    }

    for input in inputs {
        feed_tx
            .send(input)
            .await
            .context("Every streaming worker hung up before the feed drained")?;
    }
    drop(feed_tx);

    let mut locals = Vec::with_capacity(workers);
    for handle in handles {
        locals.push(handle.await.context("Streaming worker failed")?);
    }
    Ok(aggregate(locals))
}
