//! Runtime-version score correction.
//!
//! DB12 scores depend on the performance of the runtime's PRNG and
//! float pipeline, not only on the CPU, so scores produced by analyzed
//! runtime versions carry a multiplier that reproduces the historical
//! score scale. Lookup is best-effort: any miss (unknown version,
//! undetectable CPU brand, unanalyzed pair) returns the raw score
//! unchanged and only logs a warning.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// Analyzed correction factors bundled with the crate.
const BUNDLED_FACTORS: &str = include_str!("factors.json");

static BUNDLED: OnceLock<CorrectionTable> = OnceLock::new();

/// Read-only multiplier table keyed by runtime version, then CPU brand.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CorrectionTable {
    factors: HashMap<String, HashMap<String, f64>>,
}

impl CorrectionTable {
    /// The table bundled with the crate, parsed once on first use and
    /// shared read-only afterwards.
    #[must_use]
    pub fn bundled() -> &'static Self {
        BUNDLED.get_or_init(|| {
            serde_json::from_str(BUNDLED_FACTORS).expect("bundled factors.json is valid")
        })
    }

    /// Parse a table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Factor recorded for a (version, brand) pair, if analyzed.
    #[must_use]
    pub fn factor(&self, runtime_version: &str, cpu_brand: &str) -> Option<f64> {
        self.factors.get(runtime_version)?.get(cpu_brand).copied()
    }

    /// Apply the correction to a raw norm.
    ///
    /// Never fails the caller: any miss returns the raw value.
    #[must_use]
    pub fn correct(&self, raw_norm: f64, runtime_version: &str, cpu_brand: Option<&str>) -> f64 {
        if !self.factors.contains_key(runtime_version) {
            tracing::warn!(
                runtime_version,
                "runtime version has not been analyzed, returning the raw norm"
            );
            return raw_norm;
        }

        let Some(brand) = cpu_brand else {
            tracing::warn!("cannot determine the CPU brand, returning the raw norm");
            return raw_norm;
        };

        match self.factor(runtime_version, brand) {
            Some(factor) => {
                tracing::info!(factor, raw_norm, "applying correction factor");
                raw_norm * factor
            }
            None => {
                tracing::warn!(brand, "CPU model has not been analyzed, returning the raw norm");
                raw_norm
            }
        }
    }
}

/// A correction table bound to a resolved (version, brand) pair, so
/// benchmark copies can correct their own score without re-probing the
/// environment.
#[derive(Debug, Clone)]
pub struct Corrector {
    table: CorrectionTable,
    runtime_version: String,
    cpu_brand: Option<String>,
}

impl Corrector {
    /// Bind the bundled table to the given version and brand.
    #[must_use]
    pub fn new(runtime_version: impl Into<String>, cpu_brand: Option<String>) -> Self {
        Self::with_table(CorrectionTable::bundled().clone(), runtime_version, cpu_brand)
    }

    /// Bind a specific table.
    #[must_use]
    pub fn with_table(
        table: CorrectionTable,
        runtime_version: impl Into<String>,
        cpu_brand: Option<String>,
    ) -> Self {
        Self {
            table,
            runtime_version: runtime_version.into(),
            cpu_brand,
        }
    }

    /// Correct a raw norm.
    #[must_use]
    pub fn apply(&self, raw_norm: f64) -> f64 {
        self.table
            .correct(raw_norm, &self.runtime_version, self.cpu_brand.as_deref())
    }
}
