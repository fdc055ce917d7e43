//! Replay error types
//!
//! Only boundary parsing is recoverable. Misuse of a batch (ingesting into a
//! sealed batch, finishing twice, invalid style combinations) panics.

use thiserror::Error;

/// Replay-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// A batch kind tag did not name a known kind
    #[error("Unknown batch kind: {0:?}")]
    UnknownBatchKind(String),
}

/// Result type for replay operations
pub type Result<T> = std::result::Result<T, ReplayError>;
