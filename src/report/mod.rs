// Report module - Console output and report documents

pub mod console;
pub mod flat;
pub mod jira;
pub mod json;

use crate::state::{Collector, RunStats, TestResult};
use anyhow::Result;
pub use console::ConsoleReporter;
pub use flat::{CleanedTest, FlatReport};
pub use jira::{GroupRecord, HierarchicalReport, Regrouping, regroup};
pub use json::JsonReporter;

/// Reporter trait
pub trait Reporter: Send + Sync {
    /// Called when the run starts, before any suite
    fn on_run_start(&self) -> Result<()>;

    /// Called when entering a suite
    fn on_suite_start(&self, title: &str);

    /// Called when leaving a suite
    fn on_suite_end(&self, title: &str);

    fn on_test_pass(&self, result: &TestResult);

    fn on_test_fail(&self, result: &TestResult);

    fn on_test_pending(&self, result: &TestResult);

    /// Called when the entire run finishes
    fn on_run_end(&self, collector: &Collector, stats: &RunStats) -> Result<()>;
}
