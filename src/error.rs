//! Error types for basichtml library.

use std::io;
use thiserror::Error;

/// Result type alias for basichtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading documents.
///
/// Exporting never fails; these only arise before a document exists.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document JSON could not be parsed.
    #[error("Document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document structure is not usable.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDocument("root is not an object".to_string());
        assert_eq!(err.to_string(), "Invalid document: root is not an object");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
