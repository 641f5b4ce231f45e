//! Error types for studysnap-layout.
//!
//! The layout pipeline itself never fails; errors only come from reading
//! and validating requests or from writing results.

use std::io;
use thiserror::Error;

/// Result type alias for studysnap-layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading requests or rendering results.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The request is not valid JSON or does not have the expected shape.
    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The request is valid JSON but neither a block list nor a request object.
    #[error("Unsupported request shape: expected an array of blocks or an object with \"blocks\"")]
    UnsupportedShape,

    /// A block was rejected in strict mode.
    #[error("Invalid block at index {index}: {reason}")]
    InvalidBlock {
        /// Position of the block in the request
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidBlock {
            index: 3,
            reason: "missing type".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid block at index 3: missing type");

        let err = Error::Render("boom".to_string());
        assert_eq!(err.to_string(), "Rendering error: boom");
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
