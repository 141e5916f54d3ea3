//! Crate-wide error types.

use serde::Serialize;
use thiserror::Error;

/// Reconnaissance error type.
///
/// `Validation` covers request-level failures (malformed input, rejected
/// before any network query). `Lookup` covers failures of a single data
/// source; the aggregator embeds these inside the report instead of
/// propagating them.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ReconError {
    /// Request-level validation failure.
    #[error("{0}")]
    Validation(String),

    /// Failure of an individual lookup source.
    #[error("{0}")]
    Lookup(String),
}

/// Result type alias used throughout the crate.
pub type ReconResult<T> = std::result::Result<T, ReconError>;
