// Report session - folds runner events through the collector and reporters

use anyhow::Result;
use tracing::{debug, warn};

use crate::error::ReportError;
use crate::events::RunEvent;
use crate::report::Reporter;
use crate::state::{Collector, RunStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Finished,
}

/// One run's worth of accumulated state plus the reporters that observe it
pub struct ReportSession {
    collector: Collector,
    reporters: Vec<Box<dyn Reporter>>,
    phase: Phase,
    stats: Option<RunStats>,
}

impl ReportSession {
    pub fn new(reporters: Vec<Box<dyn Reporter>>) -> Self {
        Self {
            collector: Collector::new(),
            reporters,
            phase: Phase::Idle,
            stats: None,
        }
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// Final stats, once the run has ended
    pub fn stats(&self) -> Option<&RunStats> {
        self.stats.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Handle a single event. A start event always begins a fresh run.
    pub fn handle(&mut self, event: RunEvent) -> Result<()> {
        if !matches!(event, RunEvent::Start) {
            match self.phase {
                Phase::Idle => {
                    return Err(ReportError::RunNotStarted {
                        event: event.kind(),
                    }
                    .into());
                }
                Phase::Finished => {
                    return Err(ReportError::RunAlreadyFinished {
                        event: event.kind(),
                    }
                    .into());
                }
                Phase::Running => {}
            }
        }

        match event {
            RunEvent::Start => {
                if self.phase == Phase::Running {
                    warn!("Run restarted before it ended; discarding collected results");
                }
                self.collector.reset();
                self.stats = None;
                self.phase = Phase::Running;
                for r in &self.reporters {
                    r.on_run_start()?;
                }
            }
            RunEvent::SuiteStart { title } => {
                for r in &self.reporters {
                    r.on_suite_start(&title);
                }
            }
            RunEvent::SuiteEnd { title } => {
                for r in &self.reporters {
                    r.on_suite_end(&title);
                }
            }
            RunEvent::TestEnd { test } => {
                self.collector.record_test_end(test)?;
            }
            RunEvent::Pass { test } => {
                self.collector.record_pass(test)?;
                if let Some(recorded) = self.collector.passes().last() {
                    for r in &self.reporters {
                        r.on_test_pass(recorded);
                    }
                }
            }
            RunEvent::Fail { test, error } => {
                self.collector.record_failure(test, error)?;
                if let Some(recorded) = self.collector.failures().last() {
                    for r in &self.reporters {
                        r.on_test_fail(recorded);
                    }
                }
            }
            RunEvent::Pending { test } => {
                self.collector.record_pending(test)?;
                if let Some(recorded) = self.collector.skipped().last() {
                    for r in &self.reporters {
                        r.on_test_pending(recorded);
                    }
                }
            }
            RunEvent::End { mut stats } => {
                stats.close(crate::time::now_utc());
                debug!(
                    "Run ended: {} test(s), {} passed, {} failed, {} pending",
                    self.collector.total(),
                    self.collector.passes().len(),
                    self.collector.failures().len(),
                    self.collector.skipped().len()
                );
                self.phase = Phase::Finished;
                for r in &self.reporters {
                    r.on_run_end(&self.collector, &stats)?;
                }
                self.stats = Some(stats);
            }
        }

        Ok(())
    }

    /// Handle every event in order, stopping at the first error.
    pub fn replay<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<RunEvent, ReportError>>,
    {
        for event in events {
            self.handle(event?)?;
        }
        Ok(())
    }
}
