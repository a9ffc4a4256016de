// Tests for report documents written at run end - public API only

use bamboo_reporter::config::OutputPaths;
use bamboo_reporter::report::{FlatReport, HierarchicalReport, JsonReporter, Reporter};
use bamboo_reporter::state::{Collector, RunStats, TestError, TestResult};
use chrono::{TimeZone, Utc};

fn login_collector() -> Collector {
    let mut collector = Collector::new();
    let tests = vec![
        TestResult::pass("enter username", ["Login", "Valid creds"], 5),
        TestResult::pass("enter password", ["Login", "Valid creds"], 7),
        TestResult::fail(
            "submit",
            ["Login", "Valid creds"],
            3,
            TestError::new("bad password"),
        ),
        TestResult::pending("remember me", ["Login", "Valid creds"]),
    ];
    for test in tests {
        match test.outcome {
            bamboo_reporter::state::TestOutcome::Passed => {
                collector.record_pass(test.clone()).expect("pass")
            }
            bamboo_reporter::state::TestOutcome::Failed => {
                collector.record_failure(test.clone(), None).expect("fail")
            }
            bamboo_reporter::state::TestOutcome::Pending => {
                collector.record_pending(test.clone()).expect("pending")
            }
        }
        collector.record_test_end(test).expect("test end");
    }
    collector
}

fn runner_stats() -> RunStats {
    let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    RunStats {
        suites: 3,
        tests: 4,
        passes: 2,
        pending: 1,
        failures: 1,
        start: Some(start),
        end: Some(start + chrono::Duration::milliseconds(20)),
        duration: 20,
    }
}

#[test]
fn test_json_reporter_writes_both_documents() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = OutputPaths::from_primary(temp_dir.path().join("mocha.json"));
    let reporter = JsonReporter::new(paths.clone());

    // Act
    let result = reporter.on_run_end(&login_collector(), &runner_stats());

    // Assert
    assert!(result.is_ok());
    assert!(paths.primary.exists());
    assert!(paths.jira.exists());
    assert!(paths.jira.to_string_lossy().ends_with("mocha.json.jira.json"));
}

#[test]
fn test_flat_report_content() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = OutputPaths::from_primary(temp_dir.path().join("mocha.json"));
    let reporter = JsonReporter::new(paths.clone());

    // Act
    reporter
        .on_run_end(&login_collector(), &runner_stats())
        .expect("run end");

    // Assert
    let content = std::fs::read_to_string(&paths.primary).expect("Failed to read report");
    let report: FlatReport = serde_json::from_str(&content).expect("Failed to parse report");
    assert_eq!(report.stats.suites, 1);
    assert_eq!(report.stats.tests, 4);
    assert_eq!(report.passes.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].title, "submit");
    assert_eq!(report.failures[0].full_title, "Login -> Valid creds");
    assert_eq!(report.failures[0].error.as_deref(), Some("bad password"));

    let value: serde_json::Value = serde_json::from_str(&content).expect("Failed to parse JSON");
    assert!(value["passes"][0].get("error").is_none());
    assert_eq!(value["failures"][0]["featureTitle"], "Login");
    assert_eq!(value["failures"][0]["scenarioTitle"], "Valid creds");
    assert!(content.contains("\n  \"stats\""));
}

#[test]
fn test_jira_report_content() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = OutputPaths::from_primary(temp_dir.path().join("mocha.json"));
    let reporter = JsonReporter::new(paths.clone());
    let stats = runner_stats();

    // Act
    reporter
        .on_run_end(&login_collector(), &stats)
        .expect("run end");

    // Assert
    let content = std::fs::read_to_string(&paths.jira).expect("Failed to read Jira report");
    let report: HierarchicalReport =
        serde_json::from_str(&content).expect("Failed to parse Jira report");
    assert!(report.passes.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].title, "Login");
    assert_eq!(report.failures[0].duration, 15);
    // The pending test is the last of the group, so it is the one cited.
    assert_eq!(
        report.failures[0].error.as_deref(),
        Some("Test failed: remember me")
    );
    assert_eq!(report.stats.pending, 0);
    assert_eq!(report.stats.start, stats.start);
    assert_eq!(report.stats.end, stats.end);

    let value: serde_json::Value = serde_json::from_str(&content).expect("Failed to parse JSON");
    assert!(value.get("skipped").is_none());
}

#[test]
fn test_empty_run_writes_empty_documents() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = OutputPaths::from_primary(temp_dir.path().join("mocha.json"));
    let reporter = JsonReporter::new(paths.clone());

    // Act
    reporter
        .on_run_end(&Collector::new(), &RunStats::default())
        .expect("run end");

    // Assert
    let flat: FlatReport =
        serde_json::from_str(&std::fs::read_to_string(&paths.primary).unwrap()).unwrap();
    assert!(flat.passes.is_empty());
    assert!(flat.failures.is_empty());
    assert!(flat.skipped.is_empty());

    let jira: HierarchicalReport =
        serde_json::from_str(&std::fs::read_to_string(&paths.jira).unwrap()).unwrap();
    assert_eq!(jira.stats, RunStats::default());
    assert!(jira.passes.is_empty());
    assert!(jira.failures.is_empty());
}

#[test]
fn test_run_start_removes_stale_reports() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = OutputPaths::from_primary(temp_dir.path().join("mocha.json"));
    std::fs::write(&paths.primary, "stale").unwrap();
    std::fs::write(&paths.jira, "stale").unwrap();
    let reporter = JsonReporter::new(paths.clone());

    // Act
    let first = reporter.on_run_start();
    let second = reporter.on_run_start();

    // Assert
    assert!(first.is_ok());
    assert!(second.is_ok());
    assert!(!paths.primary.exists());
    assert!(!paths.jira.exists());
}

#[test]
fn test_write_failure_propagates() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = OutputPaths::from_primary(temp_dir.path().join("missing").join("mocha.json"));
    let reporter = JsonReporter::new(paths);

    // Act
    let result = reporter.on_run_end(&login_collector(), &runner_stats());

    // Assert
    assert!(result.is_err());
}

#[test]
fn test_documents_round_trip() {
    // Arrange
    let collector = login_collector();
    let stats = runner_stats();
    let regrouping = bamboo_reporter::report::regroup(collector.tests(), stats.start, stats.end);
    let flat = FlatReport::build(&collector, &stats, regrouping.scenario_count);

    // Act
    let flat_back: FlatReport =
        serde_json::from_str(&serde_json::to_string_pretty(&flat).unwrap()).unwrap();
    let jira_back: HierarchicalReport =
        serde_json::from_str(&serde_json::to_string_pretty(&regrouping.report).unwrap()).unwrap();

    // Assert
    assert_eq!(flat_back, flat);
    assert_eq!(jira_back, regrouping.report);
}
