//! # db12-orchestration
//!
//! Parallel fan-out of benchmark copies and statistical aggregation
//! of their scores.

pub mod aggregate;
pub mod runner;

pub use aggregate::{aggregate, AggregateResult};
pub use runner::run_parallel;
