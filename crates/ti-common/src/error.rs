//! Error types for TaxIntegrity.

use thiserror::Error;

/// Result type alias for TaxIntegrity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for TaxIntegrity.
///
/// The configuration core has no fatal error paths: a `Parse` error is
/// reported to the caller with state unchanged, and storage failures are
/// converted to "ignore and fall back" at the store boundary. This type
/// exists for the places where an error does reach the caller (imports,
/// the CLI surface).
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("invalid override document: {0}")]
    Parse(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Parse(_) => 10,
            Error::Storage(_) => 11,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
