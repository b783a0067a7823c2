//! # db12-core
//!
//! Core library for the DIRAC Benchmark 2012 (DB12): the calibrated
//! statistical workload, run configuration, tail-convergence counter,
//! and the runtime-version score correction table.

pub mod benchmark;
pub mod constants;
pub mod correction;
pub mod counter;
pub mod errors;
pub mod options;
pub mod result;
pub(crate) mod workload;

// Re-exports
pub use benchmark::{Benchmark, Db12Benchmark};
pub use constants::{exit_codes, CALIBRATION, DRAWS_PER_ITERATION, UNIT};
pub use correction::{CorrectionTable, Corrector};
pub use counter::{TailCounter, TailGuard};
pub use errors::BenchError;
pub use options::RunConfig;
pub use result::BenchmarkResult;

/// Run one calibrated measurement with default configuration.
///
/// This is a convenience function for simple use cases. For parallel
/// copies, correction, or tail convergence, use `Db12Benchmark` and
/// the orchestration crate directly.
///
/// # Example
/// ```no_run
/// let result = db12_core::single_benchmark(1).unwrap();
/// assert!(result.norm > 0.0);
/// ```
pub fn single_benchmark(iterations_num: u32) -> Result<BenchmarkResult, BenchError> {
    let config = RunConfig {
        iterations_num,
        ..RunConfig::default()
    }
    .normalize();
    Db12Benchmark::new().run(&config, None)
}
