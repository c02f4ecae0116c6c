//! Error type surfaced at the fetch boundary.

use thiserror::Error;

/// Why a fetch failed.
///
/// Carries the underlying error as a plain string so the coordinator can
/// store the value and the status bar can display it without dragging the
/// HTTP stack into this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request could not be completed (connectivity, timeout, non-2xx).
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived but could not be read as a search page.
    #[error("unexpected response shape: {0}")]
    Parse(String),
}
