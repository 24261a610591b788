//! Error types shared by the scaler, the clustering engine and the reporter.

use thiserror::Error;

/// Errors returned by every fallible operation in this crate.
///
/// A call either fully succeeds or returns one of these; no partially
/// computed labels or centroids are ever handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The data itself is unusable: empty, ragged, non-finite, or of the
    /// wrong width for the operation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The run parameters are unusable for the given data (bad `k`,
    /// zero iterations, negative tolerance, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
