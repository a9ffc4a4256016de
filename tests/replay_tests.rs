// End-to-end replay of recorded event logs

use bamboo_reporter::ReportError;
use bamboo_reporter::commands::{ReplayOutcome, replay_from};
use bamboo_reporter::config::OutputPaths;
use bamboo_reporter::report::{FlatReport, HierarchicalReport};

const LOGIN_LOG: &str = r#"{"event": "start"}
{"event": "suite", "title": ""}
{"event": "suite", "title": "Login"}
{"event": "suite", "title": "Valid creds"}
{"event": "pass", "test": {"title": "enter username", "ancestorPath": ["Login", "Valid creds"], "duration": 5, "outcome": "passed", "speed": "fast"}}
{"event": "test end", "test": {"title": "enter username", "ancestorPath": ["Login", "Valid creds"], "duration": 5, "outcome": "passed"}}
{"event": "pass", "test": {"title": "enter password", "ancestorPath": ["Login", "Valid creds"], "duration": 7, "outcome": "passed"}}
{"event": "test end", "test": {"title": "enter password", "ancestorPath": ["Login", "Valid creds"], "duration": 7, "outcome": "passed"}}
{"event": "fail", "test": {"title": "submit", "ancestorPath": ["Login", "Valid creds"], "duration": 3, "outcome": "failed"}, "error": {"message": "bad password", "stack": "AssertionError: bad password\n    at submit (login.spec.js:12:5)"}}
{"event": "test end", "test": {"title": "submit", "ancestorPath": ["Login", "Valid creds"], "duration": 3, "outcome": "failed"}}
{"event": "suite end", "title": "Valid creds"}
{"event": "suite end", "title": "Login"}
{"event": "suite end", "title": ""}
{"event": "end", "stats": {"suites": 3, "tests": 3, "passes": 2, "pending": 0, "failures": 1, "start": "2026-10-19T09:00:00Z", "end": "2026-10-19T09:00:00.015Z", "duration": 15}}
"#;

fn output_paths(temp_dir: &tempfile::TempDir) -> OutputPaths {
    OutputPaths::from_primary(temp_dir.path().join("mocha.json"))
}

#[test]
fn test_replay_login_scenario() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = output_paths(&temp_dir);

    // Act
    let outcome = replay_from(LOGIN_LOG.as_bytes(), paths.clone(), false, 75).expect("replay");

    // Assert
    assert_eq!(outcome, ReplayOutcome::Failed);

    let flat: FlatReport =
        serde_json::from_str(&std::fs::read_to_string(&paths.primary).unwrap()).unwrap();
    assert_eq!(flat.failures.len(), 1);
    assert_eq!(flat.failures[0].title, "submit");
    assert!(
        flat.failures[0]
            .error
            .as_deref()
            .unwrap()
            .starts_with("AssertionError: bad password")
    );
    assert_eq!(flat.passes.len(), 2);
    assert_eq!(flat.stats.suites, 1);
    assert_eq!(flat.stats.duration, 15);

    let jira: HierarchicalReport =
        serde_json::from_str(&std::fs::read_to_string(&paths.jira).unwrap()).unwrap();
    assert!(jira.passes.is_empty());
    assert_eq!(jira.failures.len(), 1);
    assert_eq!(jira.failures[0].title, "Login");
    assert_eq!(jira.failures[0].duration, 15);
    assert_eq!(
        jira.failures[0].error.as_deref(),
        Some("Test failed: submit")
    );
}

#[test]
fn test_replay_passing_run() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = output_paths(&temp_dir);
    let log = r#"{"event": "start"}
{"event": "pass", "test": {"title": "a", "ancestorPath": ["F", "S"], "duration": 1, "outcome": "passed"}}
{"event": "test end", "test": {"title": "a", "ancestorPath": ["F", "S"], "duration": 1, "outcome": "passed"}}
{"event": "end"}
"#;

    // Act
    let outcome = replay_from(log.as_bytes(), paths.clone(), false, 75).expect("replay");

    // Assert
    assert_eq!(outcome, ReplayOutcome::Passed);
    let jira: HierarchicalReport =
        serde_json::from_str(&std::fs::read_to_string(&paths.jira).unwrap()).unwrap();
    assert_eq!(jira.passes.len(), 1);
    assert!(jira.stats.end.is_some());
}

#[test]
fn test_replay_without_end_writes_nothing() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let paths = output_paths(&temp_dir);
    std::fs::write(&paths.primary, "stale").unwrap();
    let log = r#"{"event": "start"}
{"event": "test end", "test": {"title": "a", "ancestorPath": ["F", "S"], "duration": 1, "outcome": "passed"}}
"#;

    // Act
    let outcome = replay_from(log.as_bytes(), paths.clone(), false, 75).expect("replay");

    // Assert
    assert_eq!(outcome, ReplayOutcome::Incomplete);
    assert!(!paths.primary.exists());
    assert!(!paths.jira.exists());
}

#[test]
fn test_replay_rejects_malformed_line() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log = "{\"event\": \"start\"}\nnot json\n";

    // Act
    let err = replay_from(log.as_bytes(), output_paths(&temp_dir), false, 75).unwrap_err();

    // Assert
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::MalformedEvent { line: 2, .. })
    ));
}

#[test]
fn test_replay_rejects_failure_without_error() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log = r#"{"event": "start"}
{"event": "fail", "test": {"title": "a", "ancestorPath": ["F", "S"], "duration": 1, "outcome": "failed"}}
"#;

    // Act
    let err = replay_from(log.as_bytes(), output_paths(&temp_dir), false, 75).unwrap_err();

    // Assert
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::MissingFailure { .. })
    ));
}
