//! src/executors/partitioned.rs
use crate::counter::count_words;
use crate::counts::{aggregate, merge, WordCounts};
use anyhow::Context;
use std::ops::Range;
use std::sync::Arc;

/// Splits `[0, len)` into `workers` contiguous ranges, one per worker.
///
/// Chunk size is `max(1, len / workers)`; the `len % workers` leftover
/// inputs land on the last non-empty worker's range. Ranges starting at or
/// beyond `len` are empty, which happens whenever `workers > len`. The
/// ranges cover the whole sequence exactly once.
pub fn partition_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let chunk = if len > workers { len / workers } else { 1 };
    let remainder = len % workers;

    let mut ranges = Vec::with_capacity(workers);
    for worker_idx in 0..workers {
        let start = worker_idx * chunk;
        if start >= len {
            // more workers than inputs
            ranges.push(0..0);
            continue;
        }
        let mut end = start + chunk;
        if end + remainder == len {
            end += remainder;
        }
        ranges.push(start..end);
    }
    ranges
}

/// Runs `workers` tasks over precomputed contiguous slices of the inputs.
///
/// The partition is fixed before any worker starts, so workers never block
/// on each other; each counts its slice into a private local map.
#[tracing::instrument(name = "Partitioned executor", skip(inputs), fields(inputs = inputs.len()))]
pub async fn run_partitioned(
    workers: usize,
    inputs: Vec<String>,
) -> Result<WordCounts, anyhow::Error> {
    let ranges = partition_ranges(inputs.len(), workers);
    let inputs = Arc::new(inputs);

    let mut handles = Vec::with_capacity(workers);
    for (worker_idx, range) in ranges.into_iter().enumerate() {
        let inputs = Arc::clone(&inputs);
        handles.push(tokio::spawn(async move {
            let mut local = WordCounts::new();
            for input in &inputs[range] {
                merge(&mut local, count_words(input));
            }
            tracing::debug!(worker_idx, distinct_words = local.len(), "slice counted");
            local
        }));
    }

    let mut locals = Vec::with_capacity(workers);
    for handle in handles {
        locals.push(handle.await.context("Partitioned worker failed")?);
    }
    Ok(aggregate(locals))
}
