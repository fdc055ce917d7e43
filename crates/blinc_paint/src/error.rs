//! Paint error types

use thiserror::Error;

/// Errors produced while building paint values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// A color string could not be parsed
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
