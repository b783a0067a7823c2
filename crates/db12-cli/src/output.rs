//! CLI output formatting and JSON reports.

use std::io::{self, Write};

use serde::Serialize;

use db12_orchestration::AggregateResult;

/// Format the two-line stdout contract for multi-copy runs:
///
/// ```text
/// COPIES SUM ARITHMETIC-MEAN GEOMETRIC-MEAN MEDIAN
/// RAW-RESULTS
/// ```
///
/// with the raw scores space-separated and sorted ascending.
#[must_use]
pub fn format_aggregate(result: &AggregateResult) -> String {
    let raw = result
        .raw
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} {} {} {} {}\n{raw}",
        result.copies, result.sum, result.arithmetic_mean, result.geometric_mean, result.median
    )
}

/// JSON artifact for aggregate runs: the statistics plus run metadata.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// The aggregated statistics, flattened into the report object.
    #[serde(flatten)]
    pub result: &'a AggregateResult,
    /// Runtime version the scores were produced with.
    pub version: &'a str,
    /// Invocation mode label (wholenode, jobslot, multiple).
    pub mode: &'a str,
}

/// Serialize `value` as JSON to a file.
pub fn write_json<T: Serialize>(path: &str, value: &T) -> io::Result<()> {
    let content = serde_json::to_string(value).map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use db12_core::BenchmarkResult;
    use db12_orchestration::aggregate;

    fn three_copy_aggregate() -> AggregateResult {
        let results: Vec<Option<BenchmarkResult>> = [10.0, 20.0, 30.0]
            .iter()
            .map(|&norm| Some(BenchmarkResult::new(1.0, 1.0, norm)))
            .collect();
        aggregate(&results).unwrap()
    }

    #[test]
    fn two_line_contract() {
        let text = format_aggregate(&three_copy_aggregate());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().count(), 5);
        assert!(lines[0].starts_with("3 60 20 "));
        assert!(lines[0].ends_with(" 20"));
        assert_eq!(lines[1], "10 20 30");
    }

    #[test]
    fn json_report_carries_metadata() {
        let summary = three_copy_aggregate();
        let report = JsonReport {
            result: &summary,
            version: "0.1.0",
            mode: "multiple",
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"mode\":\"multiple\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
        assert!(json.contains("\"copies\":3"));
        assert!(json.contains("\"raw\":[10.0,20.0,30.0]"));
    }

    #[test]
    fn write_json_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("result.json");
        write_json(path.to_str().unwrap(), &12.9f64).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let value: f64 = content.parse().unwrap();
        assert!((value - 12.9).abs() < 1e-12);
    }
}
