//! Error types for query operations.

use thiserror::Error;

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors that can occur while validating tickers or running queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// None of the requested symbols are present on the panel's ticker axis.
    ///
    /// Recoverable: callers present empty-state guidance instead of
    /// attempting downstream queries.
    #[error("no valid tickers: none of the requested symbols are present in the panel")]
    NoValidTickers,

    /// Underlying panel error
    #[error("panel error: {0}")]
    Panel(#[from] hobart_data::DataError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
