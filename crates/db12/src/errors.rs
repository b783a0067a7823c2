//! Error handling and exit codes.

use db12_core::constants::exit_codes;
use db12_core::BenchError;

/// Map a run error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BenchError>() {
        Some(BenchError::NoUsableSamples(_)) => exit_codes::ERROR_NO_SAMPLES,
        Some(BenchError::WorkerSpawn { .. }) => exit_codes::ERROR_SPAWN,
        Some(BenchError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(BenchError::ZeroCpuTime | BenchError::Clock(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
