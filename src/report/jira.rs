// Jira report - tests regrouped per feature for issue-tracker import
//
// Tests are folded into one record per contiguous run of the same feature
// title. Grouping only looks at neighbours, so a feature whose tests are not
// contiguous in emission order produces one record per run.

use crate::state::{RunStats, TestResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder full title expected by the import tool
pub const AUTO_FULL_TITLE: &str = "AUTO";

/// One synthetic record per feature group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub title: String,
    pub full_title: String,
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Secondary output document. Pending tests are not represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicalReport {
    pub stats: RunStats,
    pub failures: Vec<GroupRecord>,
    pub passes: Vec<GroupRecord>,
}

impl HierarchicalReport {
    fn empty(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            stats: RunStats::window(start, end),
            failures: Vec::new(),
            passes: Vec::new(),
        }
    }

    fn flush(&mut self, feature: &str, duration: u64, error: Option<String>) {
        self.stats.suites += 1;
        self.stats.tests += 1;
        self.stats.duration += duration;

        let record = GroupRecord {
            title: feature.to_string(),
            full_title: AUTO_FULL_TITLE.to_string(),
            duration,
            error,
        };

        if record.error.is_some() {
            self.stats.failures += 1;
            self.failures.push(record);
        } else {
            self.stats.passes += 1;
            self.passes.push(record);
        }
    }
}

/// Result of a regrouping pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regrouping {
    pub report: HierarchicalReport,
    /// Number of feature-title transitions
    pub feature_count: usize,
    /// Number of scenario-title transitions, regardless of feature
    pub scenario_count: usize,
}

/// Fold the emission-ordered test sequence into feature groups.
///
/// A group fails if any of its tests failed. The failure message names the
/// last test of the group, which is the one being processed when the group is
/// flushed, not necessarily the one that failed.
pub fn regroup(
    tests: &[TestResult],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Regrouping {
    let mut report = HierarchicalReport::empty(start, end);
    let mut feature_count = 0;
    let mut scenario_count = 0;

    let mut current_feature: Option<&str> = None;
    let mut current_scenario: Option<&str> = None;
    let mut feature_duration = 0u64;
    let mut last_failure: Option<&str> = None;

    for (idx, test) in tests.iter().enumerate() {
        let feature = test.feature_title();
        if current_feature != Some(feature) {
            feature_count += 1;
            feature_duration = test.duration;
            last_failure = None;
            current_feature = Some(feature);
        } else {
            feature_duration += test.duration;
        }

        if test.has_failure() {
            last_failure = Some(test.title.as_str());
        }

        let scenario = test.scenario_title();
        if current_scenario != Some(scenario) {
            scenario_count += 1;
            current_scenario = Some(scenario);
        }

        let next_feature = tests.get(idx + 1).map(TestResult::feature_title);
        if next_feature != Some(feature) {
            let error = last_failure.map(|failed| {
                debug!(
                    "Feature '{}' failed (last failing test: '{}')",
                    feature, failed
                );
                format!("Test failed: {}", test.title)
            });
            debug!("Flushing feature '{}' ({}ms)", feature, feature_duration);
            report.flush(feature, feature_duration, error);
        }
    }

    Regrouping {
        report,
        feature_count,
        scenario_count,
    }
}
