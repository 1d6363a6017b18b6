//! src/engine.rs
use crate::counts::WordCounts;
use crate::executors::{run_partitioned, run_streaming};
use uuid::Uuid;

pub use crate::counter::count_words;

/// Counts the inputs with a fixed pool of workers pulling from a shared
/// ordered feed. A `worker_count` of zero is clamped to one.
///
/// The result depends only on the tokens in `inputs`, never on worker
/// count or scheduling. An empty input collection yields an empty map.
#[tracing::instrument(
    name = "Count words streaming",
    skip_all,
    fields(job_id = %Uuid::new_v4(), worker_count, inputs = inputs.len())
)]
pub async fn count_words_streaming(
    worker_count: usize,
    inputs: Vec<String>,
) -> Result<WordCounts, anyhow::Error> {
    run_streaming(clamp_worker_count(worker_count), inputs).await
}

/// Counts the inputs with workers running over contiguous slices computed
/// up front. A `worker_count` of zero is clamped to one.
///
/// Produces the same map as [`count_words_streaming`] for any inputs and
/// any worker count.
#[tracing::instrument(
    name = "Count words partitioned",
    skip_all,
    fields(job_id = %Uuid::new_v4(), worker_count, inputs = inputs.len())
)]
pub async fn count_words_partitioned(
    worker_count: usize,
    inputs: Vec<String>,
) -> Result<WordCounts, anyhow::Error> {
    run_partitioned(clamp_worker_count(worker_count), inputs).await
}

fn clamp_worker_count(worker_count: usize) -> usize {
    if worker_count == 0 {
        tracing::warn!("worker count 0 requested, clamping to 1");
        return 1;
    }
    worker_count
}
