//! Error types for the inky library.

use std::io;
use thiserror::Error;

/// Result type alias for inky operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting markup.
///
/// Malformed markup is never an error: the loader recovers from it. These
/// variants cover rejected configuration, undecodable input bytes and the
/// I/O performed by the convenience wrappers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: input is not valid UTF-8 (at byte {0})")]
    Encoding(usize),

    /// Input looks like a binary stream rather than markup.
    #[error("Input is not markup: found NUL byte at offset {0}")]
    BinaryInput(usize),

    /// A conversion option was rejected.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A component override names a component that does not exist.
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// The rewrite loop did not reach a fixpoint within the configured cap.
    #[error("Rewrite loop exceeded {0} iterations without reaching a fixpoint")]
    IterationLimit(usize),

    /// A configuration document could not be deserialized.
    #[error("Configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::IterationLimit(10);
        assert_eq!(
            err.to_string(),
            "Rewrite loop exceeded 10 iterations without reaching a fixpoint"
        );

        let err = Error::UnknownComponent("grid".into());
        assert_eq!(err.to_string(), "Unknown component: grid");
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
