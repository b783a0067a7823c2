//! Parallel benchmark runner.

use std::sync::Arc;
use std::thread;

use db12_core::{BenchError, Benchmark, BenchmarkResult, RunConfig, TailCounter};

/// Run `copies` independent benchmark workers concurrently.
///
/// Every worker is its own OS thread and all of them are started
/// before any is joined, so each copy is measured under the full
/// multi-core contention of its siblings. Each worker writes to its
/// own output slot (slot order = spawn order); a copy whose
/// measurement is degenerate leaves a `None` slot and does not abort
/// the run. No worker is retried.
///
/// When `extra_iteration` is enabled, one shared [`TailCounter`]
/// initialized to `copies` is handed to every worker.
///
/// # Errors
///
/// `BenchError::Config` for `copies == 0`; `BenchError::WorkerSpawn`
/// if a worker thread cannot be created, in which case the run is
/// aborted immediately.
pub fn run_parallel(
    benchmark: &Arc<dyn Benchmark>,
    copies: usize,
    config: &RunConfig,
) -> Result<Vec<Option<BenchmarkResult>>, BenchError> {
    if copies == 0 {
        return Err(BenchError::Config("copies must be at least 1".into()));
    }

    let config = config.normalize();
    let tail = config.extra_iteration.then(|| TailCounter::new(copies));

    // Start them all off before waiting for any to finish
    let mut handles = Vec::with_capacity(copies);
    for index in 0..copies {
        let benchmark = Arc::clone(benchmark);
        let worker_tail = tail.clone();
        let spawned = thread::Builder::new()
            .name(format!("db12-worker-{index}"))
            .spawn(move || match benchmark.run(&config, worker_tail.as_ref()) {
                Ok(result) => Some(result),
                Err(err) => {
                    tracing::warn!(index, %err, "benchmark copy produced no usable sample");
                    None
                }
            });

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(source) => {
                // Release the tail counter for the workers that will
                // never start, so running siblings can still converge
                // before the caller aborts.
                if let Some(counter) = &tail {
                    for _ in index..copies {
                        counter.mark_measured_done();
                    }
                }
                return Err(BenchError::WorkerSpawn { index, source });
            }
        }
    }

    // Wait for them all to finish
    let mut results = Vec::with_capacity(copies);
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(slot) => results.push(slot),
            Err(_) => {
                tracing::error!(index, "benchmark worker panicked");
                results.push(None);
            }
        }
    }

    Ok(results)
}
