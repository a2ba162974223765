//! Per-source failure carried inside a rates report.
//!
//! A failing rate source never aborts report generation. Its error is kept
//! alongside the other source's result and rendered as a visible line.

use thiserror::Error;

/// A rate source failed as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source_name}: {message}")]
pub struct SourceError {
    /// Short name of the failing source (e.g. "bybit-p2p").
    pub source_name: &'static str,
    /// Human-readable failure description.
    pub message: String,
}

impl SourceError {
    #[must_use]
    pub fn new(source_name: &'static str, message: impl Into<String>) -> Self {
        Self {
            source_name,
            message: message.into(),
        }
    }
}
