// Run statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counters for a run, as maintained by the test runner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub suites: usize,
    #[serde(default)]
    pub tests: usize,
    #[serde(default)]
    pub passes: usize,
    #[serde(default)]
    pub pending: usize,
    #[serde(default)]
    pub failures: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Milliseconds
    #[serde(default)]
    pub duration: u64,
}

impl RunStats {
    /// Zeroed counters spanning the given run window
    pub fn window(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Fill in the end time and duration when the runner left them unset.
    pub fn close(&mut self, now: DateTime<Utc>) {
        let end = *self.end.get_or_insert(now);
        if self.duration == 0
            && let Some(start) = self.start
        {
            self.duration = (end - start).num_milliseconds().max(0) as u64;
        }
    }
}
