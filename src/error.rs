// Typed errors for malformed run input

use thiserror::Error;

/// Errors raised while ingesting events from the test runner.
///
/// Test failures are never reported through this type: they are data and end
/// up in the written documents.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Grouping needs at least a feature and a scenario level.
    #[error("test '{title}' has {depth} ancestor level(s); a feature and a scenario are required")]
    MissingAncestors { title: String, depth: usize },

    #[error("test '{title}' was reported as failed without an error")]
    MissingFailure { title: String },

    #[error("received '{event}' before the run started")]
    RunNotStarted { event: &'static str },

    #[error("received '{event}' after the run ended")]
    RunAlreadyFinished { event: &'static str },

    #[error("malformed event on line {line}")]
    MalformedEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read event log")]
    Read(#[from] std::io::Error),
}
