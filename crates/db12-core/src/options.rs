//! Run configuration.

/// Configuration for one benchmark run, immutable for its duration.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Number of measured iterations (at least 1).
    pub iterations_num: u32,
    /// Keep running unmeasured iterations until every copy has
    /// finished its measured portion.
    pub extra_iteration: bool,
    /// Apply the runtime-version correction factor to the score.
    pub apply_correction: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations_num: 1,
            extra_iteration: false,
            apply_correction: true,
        }
    }
}

impl RunConfig {
    /// Clamp fields to valid ranges.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.iterations_num == 0 {
            self.iterations_num = 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RunConfig::default();
        assert_eq!(config.iterations_num, 1);
        assert!(!config.extra_iteration);
        assert!(config.apply_correction);
    }

    #[test]
    fn normalize_clamps_zero_iterations() {
        let config = RunConfig {
            iterations_num: 0,
            ..RunConfig::default()
        }
        .normalize();
        assert_eq!(config.iterations_num, 1);
    }

    #[test]
    fn normalize_keeps_valid_iterations() {
        let config = RunConfig {
            iterations_num: 5,
            ..RunConfig::default()
        }
        .normalize();
        assert_eq!(config.iterations_num, 5);
    }
}
