//! The calibrated benchmark loop.
//!
//! `Benchmark` is the seam consumed by the parallel runner.
//! `Db12Benchmark` is the real workload: a fixed-size statistical
//! kernel timed over a configurable number of iterations, normalized
//! to DB12 units against a fixed calibration constant.

use std::time::Instant;

use nix::time::{clock_gettime, ClockId};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::Normal;

use crate::constants::{CALIBRATION, DRAWS_PER_ITERATION, DRAW_MEAN, DRAW_STDDEV};
use crate::correction::Corrector;
use crate::counter::TailCounter;
use crate::errors::BenchError;
use crate::options::RunConfig;
use crate::result::BenchmarkResult;
use crate::workload::{run_iteration, Accumulators};

/// A benchmark one parallel copy can execute.
pub trait Benchmark: Send + Sync {
    /// Run the benchmark. When a tail counter is supplied, the
    /// implementation must decrement it exactly once — at its measured
    /// boundary, or on the way out of an early failure — and keep
    /// working until the counter reads zero.
    fn run(
        &self,
        config: &RunConfig,
        tail: Option<&TailCounter>,
    ) -> Result<BenchmarkResult, BenchError>;
}

/// The DB12 calibrated loop.
pub struct Db12Benchmark {
    draws_per_iteration: u64,
    normal: Normal<f64>,
    corrector: Option<Corrector>,
}

impl Db12Benchmark {
    /// Benchmark at the standard DB12 workload size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_draws(DRAWS_PER_ITERATION)
    }

    /// Benchmark with a custom workload size.
    ///
    /// The DB12 scale is only meaningful at the default size; smaller
    /// values exist so tests can run in milliseconds.
    #[must_use]
    pub fn with_draws(draws_per_iteration: u64) -> Self {
        Self {
            draws_per_iteration,
            normal: Normal::new(DRAW_MEAN, DRAW_STDDEV)
                .expect("workload distribution parameters are valid"),
            corrector: None,
        }
    }

    /// Attach a score corrector applied to every computed norm when
    /// the run configuration enables correction.
    #[must_use]
    pub fn with_corrector(mut self, corrector: Corrector) -> Self {
        self.corrector = Some(corrector);
        self
    }
}

impl Default for Db12Benchmark {
    fn default() -> Self {
        Self::new()
    }
}

impl Benchmark for Db12Benchmark {
    fn run(
        &self,
        config: &RunConfig,
        tail: Option<&TailCounter>,
    ) -> Result<BenchmarkResult, BenchError> {
        let config = config.normalize();
        let iterations = config.iterations_num;

        // Releases the counter on drop, so an error return between the
        // timing reads cannot leave siblings spinning for a signal
        // this copy will never send.
        let mut tail_guard = tail.map(TailCounter::guard);

        let mut rng = SmallRng::from_entropy();
        let mut acc = Accumulators::default();

        let mut cpu_start = 0.0;
        let mut cpu_end = 0.0;
        let mut wall_start = Instant::now();
        let mut wall_elapsed = 0.0;

        // Iteration 0 is a warm-up so CPUs with ramp-up or variable
        // clocks are not penalized; the timed window covers iterations
        // 1..=iterations. With a tail counter, unmeasured iterations
        // continue until every sibling copy has finished its measured
        // portion, so this copy keeps contending for the CPU instead
        // of exiting early and inflating its siblings' throughput.
        let mut iteration = 0u32;
        loop {
            if iteration == 1 {
                cpu_start = thread_cpu_seconds()?;
                wall_start = Instant::now();
            }

            run_iteration(&mut rng, &self.normal, self.draws_per_iteration, &mut acc);

            if iteration == iterations {
                cpu_end = thread_cpu_seconds()?;
                wall_elapsed = wall_start.elapsed().as_secs_f64();
                if let Some(guard) = tail_guard.as_mut() {
                    guard.mark_measured_done();
                }
            }

            iteration += 1;
            let tail_pending = tail.is_some_and(|counter| !counter.all_done());
            if iteration > iterations && !tail_pending {
                break;
            }
        }

        // Keep the accumulators observable so the workload cannot be
        // optimized away.
        std::hint::black_box(acc);

        let cpu_time = cpu_end - cpu_start;
        if cpu_time == 0.0 {
            return Err(BenchError::ZeroCpuTime);
        }

        let mut norm = normalized_score(iterations, cpu_time);
        if config.apply_correction {
            if let Some(corrector) = &self.corrector {
                norm = corrector.apply(norm);
            }
        }

        Ok(BenchmarkResult::new(cpu_time, wall_elapsed, norm))
    }
}

/// Normalized DB12 score for `iterations` measured iterations that
/// took `cpu_time` CPU seconds.
fn normalized_score(iterations: u32, cpu_time: f64) -> f64 {
    CALIBRATION * f64::from(iterations) / cpu_time
}

/// CPU seconds (user + system) consumed by the calling thread.
///
/// Workers are OS threads, so the thread CPU clock gives each copy its
/// own measurement window, unaffected by sibling copies.
#[allow(clippy::cast_precision_loss)]
fn thread_cpu_seconds() -> Result<f64, BenchError> {
    let ts = clock_gettime(ClockId::CLOCK_THREAD_CPUTIME_ID)?;
    Ok(ts.tv_sec() as f64 + ts.tv_nsec() as f64 / 1e9)
}
