//! Normalization Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Only the parse step can fail. Once a payload has been deserialized, every
//! normalizer has a defined fallback for each edge case and never errors.

use derive_more::{Display, Error};

/// A normalization error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The response body does not have the shape of the expected payload.
    #[display("malformed {what} payload: {reason}")]
    MalformedPayload {
        /// Which payload was being parsed.
        what: &'static str,
        /// Details from the deserializer.
        reason: String,
    },
    /// A content rating id outside of the fixed catalog.
    #[display("unknown content rating: {_0}")]
    UnknownRating(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The same bytes will always fail the same way.
        false
    }
}
