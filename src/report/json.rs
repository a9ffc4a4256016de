// JSON reporter - writes the flat report and the Jira report at run end

use super::Reporter;
use super::flat::FlatReport;
use super::jira::regroup;
use crate::config::OutputPaths;
use crate::state::{Collector, RunStats, TestResult};
use crate::utils::FileUtils;
use anyhow::Result;
use tracing::info;

/// JSON reporter
pub struct JsonReporter {
    paths: OutputPaths,
}

impl JsonReporter {
    /// Create new JSON reporter
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }
}

impl Reporter for JsonReporter {
    fn on_run_start(&self) -> Result<()> {
        // A leftover file from an aborted run must not be mistaken for this run's output
        for path in [&self.paths.primary, &self.paths.jira] {
            if FileUtils::remove_if_exists(path)? {
                info!("Removed stale report: {}", path.display());
            }
        }
        Ok(())
    }

    fn on_suite_start(&self, _title: &str) {
        // No-op for JSON file reporter
    }

    fn on_suite_end(&self, _title: &str) {
        // No-op for JSON file reporter
    }

    fn on_test_pass(&self, _result: &TestResult) {}

    fn on_test_fail(&self, _result: &TestResult) {}

    fn on_test_pending(&self, _result: &TestResult) {}

    fn on_run_end(&self, collector: &Collector, stats: &RunStats) -> Result<()> {
        let regrouping = regroup(collector.tests(), stats.start, stats.end);
        let flat = FlatReport::build(collector, stats, regrouping.scenario_count);

        FileUtils::write_json_pretty(&self.paths.jira, &regrouping.report)?;
        info!(
            "Wrote Jira report ({} feature group(s)) to {}",
            regrouping.report.stats.tests,
            self.paths.jira.display()
        );

        FileUtils::write_json_pretty(&self.paths.primary, &flat)?;
        info!(
            "Wrote report ({} test(s)) to {}",
            collector.total(),
            self.paths.primary.display()
        );

        Ok(())
    }
}
