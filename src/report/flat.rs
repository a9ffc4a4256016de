// Flat report - one entry per test, split by outcome

use crate::state::{Collector, RunStats, TestResult};
use serde::{Deserialize, Serialize};

/// Serialization-safe projection of a test result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedTest {
    pub title: String,
    pub full_title: String,
    pub duration: u64,
    pub scenario_title: String,
    pub feature_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&TestResult> for CleanedTest {
    fn from(test: &TestResult) -> Self {
        Self {
            title: test.title.clone(),
            full_title: test.full_title(),
            duration: test.duration,
            scenario_title: test.scenario_title().to_string(),
            feature_title: test.feature_title().to_string(),
            error: test.error.as_ref().map(|e| e.describe().to_string()),
        }
    }
}

/// Primary output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatReport {
    pub stats: RunStats,
    pub failures: Vec<CleanedTest>,
    pub passes: Vec<CleanedTest>,
    pub skipped: Vec<CleanedTest>,
}

impl FlatReport {
    /// Build the flat report. `stats.suites` is replaced by `scenario_count`.
    pub fn build(collector: &Collector, stats: &RunStats, scenario_count: usize) -> Self {
        let clean = |tests: &[TestResult]| -> Vec<CleanedTest> {
            tests.iter().map(CleanedTest::from).collect()
        };

        Self {
            stats: RunStats {
                suites: scenario_count,
                ..stats.clone()
            },
            failures: clean(collector.failures()),
            passes: clean(collector.passes()),
            skipped: clean(collector.skipped()),
        }
    }
}
