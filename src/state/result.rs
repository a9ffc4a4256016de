// Test result structures

use crate::error::ReportError;
use serde::{Deserialize, Serialize};

/// Final outcome of a single test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    Passed,
    Failed,
    #[serde(alias = "skipped")]
    Pending,
}

/// Speed classification of a passing test, relative to the slow threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fast,
    Medium,
    Slow,
}

impl Speed {
    /// Classify a duration: above `slow_ms` is slow, above half of it is medium.
    pub fn classify(duration_ms: u64, slow_ms: u64) -> Self {
        if duration_ms > slow_ms {
            Speed::Slow
        } else if duration_ms > slow_ms / 2 {
            Speed::Medium
        } else {
            Speed::Fast
        }
    }
}

/// Failure attached to a test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TestErrorRepr")]
pub struct TestError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Human-readable description: the stack trace when present, the message otherwise.
    pub fn describe(&self) -> &str {
        self.stack.as_deref().unwrap_or(&self.message)
    }
}

// Runners send either a bare message string or a `{message, stack}` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum TestErrorRepr {
    Message(String),
    Full {
        message: String,
        #[serde(default)]
        stack: Option<String>,
    },
}

impl From<TestErrorRepr> for TestError {
    fn from(repr: TestErrorRepr) -> Self {
        match repr {
            TestErrorRepr::Message(message) => TestError::new(message),
            TestErrorRepr::Full { message, stack } => TestError { message, stack },
        }
    }
}

/// Test result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub title: String,
    /// Enclosing suite titles, outermost first
    pub ancestor_path: Vec<String>,
    #[serde(default)]
    pub duration: u64,
    pub outcome: TestOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<TestError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<Speed>,
}

impl TestResult {
    /// Create a pass result
    pub fn pass<I, S>(title: impl Into<String>, ancestors: I, duration: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            ancestor_path: ancestors.into_iter().map(Into::into).collect(),
            duration,
            outcome: TestOutcome::Passed,
            error: None,
            speed: None,
        }
    }

    /// Create a fail result
    pub fn fail<I, S>(
        title: impl Into<String>,
        ancestors: I,
        duration: u64,
        error: TestError,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outcome: TestOutcome::Failed,
            error: Some(error),
            ..Self::pass(title, ancestors, duration)
        }
    }

    /// Create a pending result
    pub fn pending<I, S>(title: impl Into<String>, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outcome: TestOutcome::Pending,
            ..Self::pass(title, ancestors, 0)
        }
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Outermost suite title
    pub fn feature_title(&self) -> &str {
        self.ancestor_path.first().map(String::as_str).unwrap_or("")
    }

    /// Second-level suite title
    pub fn scenario_title(&self) -> &str {
        self.ancestor_path.get(1).map(String::as_str).unwrap_or("")
    }

    /// `"<feature> -> <scenario>"`
    pub fn full_title(&self) -> String {
        format!("{} -> {}", self.feature_title(), self.scenario_title())
    }

    /// Every non-empty ancestor title followed by the test title, space separated
    pub fn path_title(&self) -> String {
        self.ancestor_path
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.title.as_str()))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_failure(&self) -> bool {
        self.outcome == TestOutcome::Failed || self.error.is_some()
    }

    /// Reject results that cannot be placed in a feature/scenario group.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.ancestor_path.len() < 2 {
            return Err(ReportError::MissingAncestors {
                title: self.title.clone(),
                depth: self.ancestor_path.len(),
            });
        }
        Ok(())
    }

    /// Same test as `other`, judged by title and ancestry.
    pub fn same_test(&self, other: &TestResult) -> bool {
        self.title == other.title && self.ancestor_path == other.ancestor_path
    }
}
