//! Benchmark result value type.

use serde::Serialize;

use crate::constants::UNIT;

/// Result of one completed calibrated-loop run.
///
/// Immutable once created; a degenerate measurement never produces a
/// `BenchmarkResult` (it surfaces as `BenchError::ZeroCpuTime`).
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// CPU seconds consumed by the measured iterations.
    pub cpu_time: f64,
    /// Wall-clock seconds elapsed over the measured iterations.
    pub wall_time: f64,
    /// Normalized score in DB12 units.
    pub norm: f64,
    /// Score unit label.
    pub unit: &'static str,
}

impl BenchmarkResult {
    /// Create a result with the standard unit label.
    #[must_use]
    pub fn new(cpu_time: f64, wall_time: f64, norm: f64) -> Self {
        Self {
            cpu_time,
            wall_time,
            norm,
            unit: UNIT,
        }
    }
}
