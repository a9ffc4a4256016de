// Run events - the lifecycle notifications a test runner emits
// Serialized as newline-delimited JSON records tagged by "event"

use crate::error::ReportError;
use crate::state::{RunStats, TestError, TestResult};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// One lifecycle notification from the test runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum RunEvent {
    /// Run is about to start
    #[serde(rename = "start")]
    Start,

    /// Entering a suite
    #[serde(rename = "suite")]
    SuiteStart { title: String },

    /// Leaving a suite
    #[serde(rename = "suite end")]
    SuiteEnd { title: String },

    /// A test completed, whatever its outcome
    #[serde(rename = "test end")]
    TestEnd { test: TestResult },

    #[serde(rename = "pass")]
    Pass { test: TestResult },

    #[serde(rename = "fail")]
    Fail {
        test: TestResult,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<TestError>,
    },

    #[serde(rename = "pending")]
    Pending { test: TestResult },

    /// Run finished
    #[serde(rename = "end")]
    End {
        #[serde(default)]
        stats: RunStats,
    },
}

impl RunEvent {
    /// Event name as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            RunEvent::Start => "start",
            RunEvent::SuiteStart { .. } => "suite",
            RunEvent::SuiteEnd { .. } => "suite end",
            RunEvent::TestEnd { .. } => "test end",
            RunEvent::Pass { .. } => "pass",
            RunEvent::Fail { .. } => "fail",
            RunEvent::Pending { .. } => "pending",
            RunEvent::End { .. } => "end",
        }
    }

    /// Parse a single record; `line` is 1-based and only used for errors.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, ReportError> {
        serde_json::from_str(text).map_err(|source| ReportError::MalformedEvent { line, source })
    }
}

/// Read events from a newline-delimited JSON log, skipping blank lines.
pub fn read_events<R: BufRead>(reader: R) -> impl Iterator<Item = Result<RunEvent, ReportError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(text) if text.trim().is_empty() => None,
            Ok(text) => Some(RunEvent::parse_line(&text, idx + 1)),
            Err(e) => Some(Err(ReportError::from(e))),
        })
}
