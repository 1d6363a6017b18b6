//! src/lib.rs
pub mod configuration;
pub mod counter;
pub mod counts;
pub mod engine;
pub mod executors;
pub mod telemetry;
