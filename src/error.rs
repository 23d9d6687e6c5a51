//! Error types for the Palimpsest library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`PalimpsestError`] enum. Dictionary misses are not errors: lookups return
//! `Ok(None)` or an empty suggestion set instead.
//!
//! # Examples
//!
//! ```
//! use palimpsest::error::{PalimpsestError, Result};
//!
//! fn check_threshold(threshold: f64) -> Result<()> {
//!     if threshold <= 0.0 {
//!         return Err(PalimpsestError::validation("threshold must be > 0"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_threshold(0.0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Palimpsest operations.
#[derive(Error, Debug)]
pub enum PalimpsestError {
    /// I/O errors (opening or mapping dictionary files, writing indexes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An algorithm was called with its sequences in the wrong order
    #[error("Ordering error: {0}")]
    Ordering(String),

    /// An argument failed validation (thresholds, depths, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Raw, undecoded bytes were passed where decoded text is required
    #[error("Undecoded text passed as `{argument}`: decode it before crossing this boundary")]
    UndecodedText {
        /// Name of the offending argument.
        argument: String,
    },

    /// Bytes could not be decoded with the requested encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A dictionary line did not match the expected entry format
    #[error("Parse error: {0}")]
    Parse(String),

    /// An edit-operation sequence does not fit the sequences it is applied to
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PalimpsestError.
pub type Result<T> = std::result::Result<T, PalimpsestError>;

impl PalimpsestError {
    /// Create a new ordering error.
    pub fn ordering<S: Into<String>>(msg: S) -> Self {
        PalimpsestError::Ordering(msg.into())
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        PalimpsestError::Validation(msg.into())
    }

    /// Create a new undecoded-text error naming the offending argument.
    pub fn undecoded_text<S: Into<String>>(argument: S) -> Self {
        PalimpsestError::UndecodedText {
            argument: argument.into(),
        }
    }

    /// Create a new encoding error.
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        PalimpsestError::Encoding(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        PalimpsestError::Parse(msg.into())
    }

    /// Create a new alignment error.
    pub fn alignment<S: Into<String>>(msg: S) -> Self {
        PalimpsestError::Alignment(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PalimpsestError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PalimpsestError::ordering("short sequence is longer");
        assert_eq!(error.to_string(), "Ordering error: short sequence is longer");

        let error = PalimpsestError::validation("threshold out of range");
        assert_eq!(error.to_string(), "Validation error: threshold out of range");

        let error = PalimpsestError::parse("missing tab");
        assert_eq!(error.to_string(), "Parse error: missing tab");
    }

    #[test]
    fn test_undecoded_text_names_argument() {
        let error = PalimpsestError::undecoded_text("query");
        match &error {
            PalimpsestError::UndecodedText { argument } => assert_eq!(argument, "query"),
            _ => panic!("Expected UndecodedText variant"),
        }
        assert!(error.to_string().contains("`query`"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PalimpsestError::from(io_error);

        match error {
            PalimpsestError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
