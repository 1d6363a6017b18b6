//! src/main.rs
use std::io::BufRead;

use wordcount::configuration::{get_configuration, Strategy};
use wordcount::engine::{count_words_partitioned, count_words_streaming};
use wordcount::telemetry::init_tracing;

/// Reads one input string per stdin line and prints the merged counts.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let configuration = get_configuration().expect("Failed to read configuration.");
    let worker_count = configuration.cluster.workers as usize;

    let inputs: Vec<String> = std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()?;

    let counts = match configuration.engine.strategy {
        Strategy::Streaming => count_words_streaming(worker_count, inputs).await?,
        Strategy::Partitioned => count_words_partitioned(worker_count, inputs).await?,
    };

    let mut lines: Vec<String> = counts
        .into_iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect();
    lines.sort();
    println!("{}", lines.join("\n"));
    Ok(())
}
