// Console reporter - mocha-style progress output

use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::Style;

use crate::state::{Collector, RunStats, Speed, TestResult};

const CHECKMARK: &str = "✓";

/// Console reporter
pub struct ConsoleReporter {
    color: bool,
    slow_ms: u64,
    indents: AtomicUsize,
    failure_count: AtomicUsize,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    /// Create new console reporter writing to stdout
    pub fn new(color: bool, slow_ms: u64) -> Self {
        Self::with_writer(Box::new(io::stdout()), color, slow_ms)
    }

    pub fn with_writer(out: Box<dyn Write + Send>, color: bool, slow_ms: u64) -> Self {
        Self {
            color,
            slow_ms,
            indents: AtomicUsize::new(0),
            failure_count: AtomicUsize::new(0),
            out: Mutex::new(out),
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indents.load(Ordering::Relaxed).saturating_sub(1))
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }

    fn speed_of(&self, result: &TestResult) -> Speed {
        result
            .speed
            .unwrap_or_else(|| Speed::classify(result.duration, self.slow_ms))
    }

    /// Format the line printed for a passing test
    pub fn pass_line(&self, result: &TestResult) -> String {
        let mut line = format!(
            "{}{}{}",
            self.indent(),
            self.paint(Style::new().green(), &format!("  {}", CHECKMARK)),
            self.paint(Style::new().dim(), &format!(" {}", result.title)),
        );

        let duration_style = match self.speed_of(result) {
            Speed::Fast => None,
            Speed::Medium => Some(Style::new().yellow()),
            Speed::Slow => Some(Style::new().red()),
        };
        if let Some(style) = duration_style {
            line.push_str(&self.paint(style, &format!(" ({}ms)", result.duration)));
        }

        line
    }

    /// Print summary
    pub fn print_epilogue(&self, collector: &Collector, stats: &RunStats) {
        self.emit("");
        self.emit(&format!(
            "  {} {}",
            self.paint(
                Style::new().green(),
                &format!("{} passing", collector.passes().len())
            ),
            self.paint(Style::new().dim(), &format!("({}ms)", stats.duration)),
        ));

        if !collector.skipped().is_empty() {
            self.emit(&format!(
                "  {}",
                self.paint(
                    Style::new().cyan(),
                    &format!("{} pending", collector.skipped().len())
                )
            ));
        }

        if !collector.failures().is_empty() {
            self.emit(&format!(
                "  {}",
                self.paint(
                    Style::new().red(),
                    &format!("{} failing", collector.failures().len())
                )
            ));
            self.emit("");

            for (i, result) in collector.failures().iter().enumerate() {
                self.emit(&format!("  {}) {}:", i + 1, result.path_title()));
                let description = result
                    .error
                    .as_ref()
                    .map(|e| e.describe())
                    .unwrap_or("Unknown error");
                for error_line in description.lines() {
                    self.emit(&self.paint(Style::new().red(), &format!("     {}", error_line)));
                }
                self.emit("");
            }
        }

        self.emit("");
    }
}

impl super::Reporter for ConsoleReporter {
    fn on_run_start(&self) -> anyhow::Result<()> {
        self.indents.store(0, Ordering::Relaxed);
        self.failure_count.store(0, Ordering::Relaxed);
        Ok(())
    }

    fn on_suite_start(&self, title: &str) {
        self.indents.fetch_add(1, Ordering::Relaxed);
        self.emit(&format!("{}{}", self.indent(), title));
    }

    fn on_suite_end(&self, _title: &str) {
        let previous = self
            .indents
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some(n.saturating_sub(1))
            })
            .unwrap_or(0);
        if previous.saturating_sub(1) == 1 {
            self.emit("");
        }
    }

    fn on_test_pass(&self, result: &TestResult) {
        self.emit(&self.pass_line(result));
    }

    fn on_test_fail(&self, result: &TestResult) {
        let n = self.failure_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.emit(&format!(
            "{}{}",
            self.indent(),
            self.paint(Style::new().red(), &format!("  {}) {}", n, result.title))
        ));
    }

    fn on_test_pending(&self, result: &TestResult) {
        self.emit(&format!(
            "{}{}",
            self.indent(),
            self.paint(Style::new().cyan(), &format!("  - {}", result.title))
        ));
    }

    fn on_run_end(&self, collector: &Collector, stats: &RunStats) -> anyhow::Result<()> {
        self.print_epilogue(collector, stats);
        Ok(())
    }
}
