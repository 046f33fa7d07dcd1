//! Error types for truckload.

use thiserror::Error;

/// Result type alias for truckload operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that reject a loading request.
///
/// Running out of space is never an error: boxes that do not fit are
/// reported through [`PackingReport::not_placed`](crate::PackingReport).
#[derive(Debug, Error)]
pub enum Error {
    /// A custom box type has unusable dimensions or identity.
    #[error("Invalid box type: {0}")]
    InvalidBox(String),

    /// The request is malformed (missing fields, bad values, duplicate ids).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
