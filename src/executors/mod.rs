//! src/executors/mod.rs
mod partitioned;
pub use partitioned::{partition_ranges, run_partitioned};

mod streaming;
pub use streaming::run_streaming;
