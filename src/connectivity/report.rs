use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use colored::*;
use serde::{Deserialize, Serialize};

use crate::connectivity::config::Config;

const REPORT_DIR: &str = "test-results";
const RULE: &str = "========================================";

/// Outcome of one executed probe. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub status_code: u16,
    pub response_time: String,
}

/// Accumulator for the whole run; results keep execution order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub results: Vec<TestCaseResult>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the result and prints its colorized status line.
    ///
    /// Verbose mode adds a gray detail line under passing probes; failing
    /// probes always print their message in red.
    pub fn record(&mut self, result: TestCaseResult, verbose: bool) {
        self.total += 1;
        if result.passed {
            self.passed += 1;
            println!("{}", format!("  ✓ {}", result.name).green());
            if verbose && !result.message.is_empty() {
                println!("{}", format!("    {}", result.message).bright_black());
            }
        } else {
            self.failed += 1;
            println!("{}", format!("  ✗ {}", result.name).red());
            if !result.message.is_empty() {
                println!("{}", format!("    {}", result.message).red());
            }
        }
        self.results.push(result);
    }

    /// CI gate: 0 only when no recorded probe failed. The fatal-abort path
    /// records its failed health check first, so an aborted run exits 1.
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }

    /// Percentage of passing probes; 0 when nothing ran.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.passed) / f64::from(self.total) * 100.0
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub pass_rate: f64,
}

/// The persisted JSON document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: String,
    pub backend_url: String,
    pub frontend_url: String,
    pub summary: ReportSummary,
    pub results: Vec<TestCaseResult>,
}

impl Report {
    pub fn build(summary: &RunSummary, config: &Config) -> Self {
        Report {
            timestamp: Local::now().to_rfc3339(),
            backend_url: config.backend_url.clone(),
            frontend_url: config.frontend_url.clone(),
            summary: ReportSummary {
                total: summary.total,
                passed: summary.passed,
                failed: summary.failed,
                pass_rate: (summary.pass_rate() * 100.0).round() / 100.0,
            },
            results: summary.results.clone(),
        }
    }
}

/// Prints the colorized run totals.
pub fn print_summary(summary: &RunSummary) {
    println!("{}", RULE.cyan());
    println!("{}", "Test summary".cyan());
    println!("{}", RULE.cyan());
    println!();
    println!("Total tests: {}", summary.total);
    println!("{}", format!("Passed: {}", summary.passed).green());
    println!("{}", format!("Failed: {}", summary.failed).red());

    let pass_rate = summary.pass_rate();
    let line = format!("Pass rate: {:.2}%", pass_rate);
    let line = if pass_rate >= 80.0 {
        line.green()
    } else if pass_rate >= 60.0 {
        line.yellow()
    } else {
        line.red()
    };
    println!("{}", line);
    println!();
}

/// Persists the run as a timestamped JSON report and returns its path.
///
/// The timestamp in the file name keeps prior runs from being overwritten.
pub fn save_report(summary: &RunSummary, config: &Config) -> Result<PathBuf> {
    fs::create_dir_all(REPORT_DIR)?;

    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = PathBuf::from(format!(
        "{}/connectivity-report-{}.json",
        REPORT_DIR, timestamp
    ));

    let report = Report::build(summary, config);
    fs::write(&path, serde_json::to_string_pretty(&report)?)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> TestCaseResult {
        TestCaseResult {
            name: name.to_string(),
            passed,
            message: String::new(),
            status_code: if passed { 200 } else { 500 },
            response_time: "12ms".to_string(),
        }
    }

    #[test]
    fn totals_stay_consistent_while_recording() {
        let mut summary = RunSummary::new();
        for (i, passed) in [true, false, true, true, false].iter().enumerate() {
            summary.record(result(&format!("probe {}", i), *passed), false);
            assert_eq!(summary.total, summary.passed + summary.failed);
            assert_eq!(summary.total as usize, summary.results.len());
        }
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn pass_rate_is_zero_on_an_empty_run() {
        assert_eq!(RunSummary::new().pass_rate(), 0.0);
    }

    #[test]
    fn exit_code_is_zero_only_without_failures() {
        let mut summary = RunSummary::new();
        assert_eq!(summary.exit_code(), 0);

        summary.record(result("a", true), false);
        assert_eq!(summary.exit_code(), 0);

        // One failure flips the gate, as on the fatal-abort path where the
        // failed health check is the only recorded result.
        summary.record(result("b", false), false);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn pass_rate_is_a_percentage() {
        let mut summary = RunSummary::new();
        summary.record(result("a", true), false);
        summary.record(result("b", true), false);
        summary.record(result("c", false), false);
        assert!((summary.pass_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn report_counts_match_its_result_list() {
        let config = Config {
            backend_url: "http://localhost:8080".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            timeout: std::time::Duration::from_secs(10),
            verbose: false,
        };
        let mut summary = RunSummary::new();
        summary.record(result("a", true), false);
        summary.record(result("b", false), false);

        let report = Report::build(&summary, &config);
        assert_eq!(report.summary.total as usize, report.results.len());
        assert_eq!(report.summary.pass_rate, 50.0);

        // The document must survive a serde round trip untouched.
        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.summary.total as usize, parsed.results.len());
        assert_eq!(parsed.backend_url, "http://localhost:8080");
    }
}
