//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Full version label in the historical `VERSION DB12` form.
#[must_use]
pub fn full_version() -> String {
    format!("{} DB12", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_carries_unit() {
        assert!(full_version().ends_with(" DB12"));
    }
}
