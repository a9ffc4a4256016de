// State module - Run accumulation
// Ordered test sequences collected while a run is in progress

pub mod result;
pub mod stats;

pub use result::{Speed, TestError, TestOutcome, TestResult};
pub use stats::RunStats;

use crate::error::ReportError;

/// Accumulates test results in the order the runner emits them.
///
/// Every completed test lands in the all-tests sequence (via test end) and in
/// exactly one outcome sequence (via pass, fail or pending).
#[derive(Debug, Clone, Default)]
pub struct Collector {
    tests: Vec<TestResult>,
    passes: Vec<TestResult>,
    failures: Vec<TestResult>,
    skipped: Vec<TestResult>,
}

impl Collector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed test, whatever its outcome.
    ///
    /// A failed test that arrives without its error inherits the one from the
    /// matching fail notification, which the runner emits first.
    pub fn record_test_end(&mut self, mut test: TestResult) -> Result<(), ReportError> {
        test.validate()?;

        if test.outcome == TestOutcome::Failed
            && test.error.is_none()
            && let Some(failed) = self.failures.last().filter(|f| f.same_test(&test))
        {
            test.error = failed.error.clone();
        }

        self.tests.push(test);
        Ok(())
    }

    pub fn record_pass(&mut self, mut test: TestResult) -> Result<(), ReportError> {
        test.validate()?;
        test.outcome = TestOutcome::Passed;
        self.passes.push(test);
        Ok(())
    }

    /// Record a failure. `error` fills in the test's own error when it has none.
    pub fn record_failure(
        &mut self,
        mut test: TestResult,
        error: Option<TestError>,
    ) -> Result<(), ReportError> {
        test.validate()?;
        if test.error.is_none() {
            test.error = error;
        }
        if test.error.is_none() {
            return Err(ReportError::MissingFailure { title: test.title });
        }
        test.outcome = TestOutcome::Failed;
        self.failures.push(test);
        Ok(())
    }

    pub fn record_pending(&mut self, mut test: TestResult) -> Result<(), ReportError> {
        test.validate()?;
        test.outcome = TestOutcome::Pending;
        self.skipped.push(test);
        Ok(())
    }

    /// All completed tests, in emission order
    pub fn tests(&self) -> &[TestResult] {
        &self.tests
    }

    pub fn passes(&self) -> &[TestResult] {
        &self.passes
    }

    pub fn failures(&self) -> &[TestResult] {
        &self.failures
    }

    pub fn skipped(&self) -> &[TestResult] {
        &self.skipped
    }

    /// Get total tests
    pub fn total(&self) -> usize {
        self.tests.len()
    }

    /// Check if all tests passed
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Reset results
    pub fn reset(&mut self) {
        self.tests.clear();
        self.passes.clear();
        self.failures.clear();
        self.skipped.clear();
    }
}
