//! Error types for the sales calculator
//!
//! Two families of errors exist:
//!
//! - [`SalesError`]: run-level failures (input documents that cannot be loaded,
//!   a results file that cannot be written). Loading failures abort the run
//!   before any computation, a write failure is reported and ignored.
//! - [`FieldError`]: extraction failures for a single record field. These never
//!   leave the component that detects them; the offending record is skipped and
//!   a [`Diagnostic`](crate::types::Diagnostic) is emitted instead.

use thiserror::Error;

/// Run-level error type
///
/// Display texts are the console diagnostics without the `ERROR: ` prefix,
/// which is added by the reporter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    /// Input document does not exist
    #[error("File '{path}' not found.")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// Input document is not syntactically valid JSON (or not UTF-8)
    #[error("File '{path}' contains invalid JSON ({message}).")]
    InvalidJson {
        /// Path of the offending document
        path: String,
        /// Parser message, including line and column
        message: String,
    },

    /// Any other I/O failure while opening or reading an input document
    #[error("Cannot open file '{path}': {message}")]
    UnreadableFile {
        /// Path of the offending document
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// Results file could not be written
    ///
    /// Reported, but does not change the exit status.
    #[error("Could not write results file: {message}")]
    ResultsWrite {
        /// Description of the underlying I/O error
        message: String,
    },

    /// One or both input documents failed to load
    ///
    /// Individual causes have already been reported when this is returned.
    #[error("{failed} input document(s) could not be loaded")]
    InputUnavailable {
        /// Number of documents that failed
        failed: usize,
    },
}

/// Field extraction error for a single catalogue entry or sale item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("record is not an object")]
    NotAnObject,

    #[error("missing key '{0}'")]
    MissingKey(&'static str),

    #[error("key '{key}' must be a {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("key '{0}' is not numeric")]
    NotNumeric(&'static str),
}

impl SalesError {
    /// Build the appropriate load error for an I/O failure on `path`
    pub fn from_io(path: &str, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => SalesError::FileNotFound {
                path: path.to_string(),
            },
            _ => SalesError::UnreadableFile {
                path: path.to_string(),
                message: error.to_string(),
            },
        }
    }

    /// Build a ResultsWrite error from an I/O failure
    pub fn results_write(error: &std::io::Error) -> Self {
        SalesError::ResultsWrite {
            message: error.to_string(),
        }
    }
}
