//! Source Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A source error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The transport could not complete the request (connection, timeout,
    /// rate limit, non-success status).
    #[display("transport error: {_0}")]
    Transport(#[error(not(source))] String),
    /// The API has nothing at the requested location.
    #[display("not found: {_0}")]
    NotFound(#[error(not(source))] String),
    /// The response arrived but could not be parsed.
    #[display("could not normalize response")]
    Normalize,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
