//! Error types for the deckgen library.

use std::io;
use thiserror::Error;

/// Result type alias for deckgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or writing a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// The presentation contains no slides.
    #[error("Presentation has no slides")]
    EmptyPresentation,

    /// A slide has neither title nor body text to fill its placeholders.
    #[error("Slide {0} has no title or body content")]
    EmptySlide(usize),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyPresentation;
        assert_eq!(err.to_string(), "Presentation has no slides");

        let err = Error::EmptySlide(3);
        assert_eq!(err.to_string(), "Slide 3 has no title or body content");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_zip() {
        let zip_err = zip::result::ZipError::FileNotFound;
        let err: Error = zip_err.into();
        assert!(matches!(err, Error::ZipArchive(_)));
    }
}
