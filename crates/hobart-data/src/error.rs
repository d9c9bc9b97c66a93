//! Error types for panel operations.

use thiserror::Error;

/// Result type for panel operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or querying the beta panel.
#[derive(Debug, Error)]
pub enum DataError {
    /// Source table lacks the expected two-level column structure, or a
    /// row index entry cannot be parsed as a date
    #[error("malformed panel source: {0}")]
    Format(String),

    /// Panel has zero dated rows
    #[error("panel has no dated rows")]
    EmptyPanel,

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
