//! # db12-probe
//!
//! Instance-count and CPU-information probes. The benchmark core only
//! consumes two integers (how many copies to run); how they are
//! sourced — machine/job features hints or the logical CPU count —
//! lives entirely here.

use std::path::PathBuf;

/// Copies needed to occupy the whole machine.
///
/// Prefers the `$MACHINEFEATURES/total_cpu` hint, then the logical
/// CPU count, then 1.
#[must_use]
pub fn wholenode_instances() -> usize {
    feature_hint("MACHINEFEATURES", "total_cpu").unwrap_or_else(|| logical_cpus().unwrap_or(1))
}

/// Copies needed to occupy the current job slot.
///
/// Prefers the `$JOBFEATURES/allocated_cpu` hint, defaulting to 1.
#[must_use]
pub fn jobslot_instances() -> usize {
    feature_hint("JOBFEATURES", "allocated_cpu").unwrap_or(1)
}

/// Leading alphabetic token of the CPU brand string, e.g. "Intel" or
/// "AMD". `None` when the brand cannot be determined.
#[must_use]
pub fn cpu_brand() -> Option<String> {
    use sysinfo::System;
    let sys = System::new_all();
    let brand = sys.cpus().first().map(|cpu| cpu.brand().to_string())?;
    brand_token(&brand)
}

fn logical_cpus() -> Option<usize> {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .ok()
}

/// Read a machine/job features value: `$var` names a directory holding
/// a file `name` containing a plain non-negative integer.
fn feature_hint(var: &str, name: &str) -> Option<usize> {
    let dir = std::env::var_os(var)?;
    let path = PathBuf::from(dir).join(name);
    let content = std::fs::read_to_string(&path).ok()?;
    let value: usize = content.trim().parse().ok()?;
    if value == 0 {
        tracing::warn!(?path, "ignoring zero instance-count hint");
        return None;
    }
    Some(value)
}

fn brand_token(brand: &str) -> Option<String> {
    let token: String = brand.chars().take_while(char::is_ascii_alphabetic).collect();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
