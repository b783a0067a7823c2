//! Error taxonomy for benchmark runs.

use std::io;

/// Error type for DB12 benchmark runs.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The measured CPU time was exactly zero, so no score can be
    /// derived. Treated as "no usable sample" for that copy.
    #[error("measured CPU time was zero (clock too coarse or workload degenerate)")]
    ZeroCpuTime,

    /// Reading the thread CPU clock failed.
    #[error("failed to read thread CPU clock: {0}")]
    Clock(#[from] nix::Error),

    /// Every copy produced a degenerate measurement.
    #[error("no usable samples from {0} benchmark copies")]
    NoUsableSamples(usize),

    /// A worker thread could not be spawned.
    #[error("failed to spawn benchmark worker {index}")]
    WorkerSpawn {
        /// Index of the worker that failed to start.
        index: usize,
        #[source]
        source: io::Error,
    },

    /// Invalid run configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert!(BenchError::ZeroCpuTime.to_string().contains("CPU time"));
        assert!(BenchError::NoUsableSamples(4).to_string().contains('4'));
        let err = BenchError::WorkerSpawn {
            index: 2,
            source: io::Error::other("out of threads"),
        };
        assert!(err.to_string().contains("worker 2"));
    }
}
