//! Benchmark constants.

/// Pseudo-random draws per measured iteration.
///
/// This workload size corresponds to 1 kHS2k.seconds, i.e. 250 HS06
/// seconds, on the reference hardware the scale was calibrated on.
pub const DRAWS_PER_ITERATION: u64 = 12_500_000;

/// Calibration constant mapping measured CPU seconds to DB12 units.
pub const CALIBRATION: f64 = 250.0;

/// Score unit label attached to every result.
pub const UNIT: &str = "DB12";

/// Mean of the normal distribution the workload samples.
pub const DRAW_MEAN: f64 = 10.0;

/// Standard deviation of the normal distribution the workload samples.
pub const DRAW_STDDEV: f64 = 1.0;

/// Process exit codes used by the CLI.
pub mod exit_codes {
    /// Successful run.
    pub const SUCCESS: i32 = 0;
    /// Unclassified error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Every copy produced a degenerate measurement.
    pub const ERROR_NO_SAMPLES: i32 = 2;
    /// A worker thread could not be spawned.
    pub const ERROR_SPAWN: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
