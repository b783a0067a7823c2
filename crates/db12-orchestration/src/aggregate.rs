//! Statistical aggregation of per-copy scores.

use serde::Serialize;

use db12_core::{BenchError, BenchmarkResult};

/// Aggregated statistics over the usable per-copy scores.
///
/// Derived once after all workers join; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Usable scores, sorted ascending.
    pub raw: Vec<f64>,
    /// Number of usable scores.
    pub copies: usize,
    /// Sum of the scores.
    pub sum: f64,
    /// `sum / copies`.
    pub arithmetic_mean: f64,
    /// `product(raw) ^ (1 / copies)`.
    pub geometric_mean: f64,
    /// Lower median: `raw[(copies - 1) / 2]`.
    ///
    /// For even counts this is the lower of the two middle elements,
    /// not their average. Preserved exactly for compatibility with
    /// historical score records.
    pub median: f64,
}

/// Aggregate per-copy results, ignoring empty slots.
///
/// # Errors
///
/// `BenchError::NoUsableSamples` when every slot is `None`; callers
/// must treat that as a hard failure rather than divide by zero.
pub fn aggregate(results: &[Option<BenchmarkResult>]) -> Result<AggregateResult, BenchError> {
    let mut raw: Vec<f64> = results.iter().flatten().map(|r| r.norm).collect();
    if raw.is_empty() {
        return Err(BenchError::NoUsableSamples(results.len()));
    }
    raw.sort_by(f64::total_cmp);

    let copies = raw.len();
    let sum: f64 = raw.iter().sum();
    let product: f64 = raw.iter().product();
    #[allow(clippy::cast_precision_loss)]
    let count = copies as f64;

    Ok(AggregateResult {
        copies,
        sum,
        arithmetic_mean: sum / count,
        geometric_mean: product.powf(1.0 / count),
        median: raw[(copies - 1) / 2],
        raw,
    })
}
