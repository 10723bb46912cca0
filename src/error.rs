//! Error types for Sazonar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Sazonar operations.
///
/// Field-level parse failures are recovered inside the parsers themselves
/// (malformed input degrades to an empty value with a logged warning), so
/// most variants here surface only at construction or batch boundaries.
///
/// # Examples
///
/// ```
/// use sazonar::error::SazonarError;
///
/// let err = SazonarError::Parse {
///     field: "nutrition".to_string(),
///     message: "expected 7 values, got 3".to_string(),
/// };
/// assert!(err.to_string().contains("nutrition"));
/// ```
#[derive(Debug)]
pub enum SazonarError {
    /// A semi-structured text field could not be decoded.
    Parse {
        /// Field name (e.g. "ingredients", "nutrition")
        field: String,
        /// Error description
        message: String,
    },

    /// An optional external resource could not be loaded.
    MissingResource {
        /// Resource path
        path: String,
        /// Error description
        message: String,
    },

    /// A raw recipe record carries no usable identifier.
    InvalidRecord {
        /// Offending recipe id as found in the input
        recipe_id: i64,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SazonarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SazonarError::Parse { field, message } => {
                write!(f, "Failed to parse field '{field}': {message}")
            }
            SazonarError::MissingResource { path, message } => {
                write!(f, "Resource unavailable at '{path}': {message}")
            }
            SazonarError::InvalidRecord { recipe_id } => {
                write!(f, "Invalid recipe record: id = {recipe_id}")
            }
            SazonarError::Io(e) => write!(f, "I/O error: {e}"),
            SazonarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SazonarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SazonarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SazonarError {
    fn from(err: std::io::Error) -> Self {
        SazonarError::Io(err)
    }
}

impl From<&str> for SazonarError {
    fn from(msg: &str) -> Self {
        SazonarError::Other(msg.to_string())
    }
}

impl From<String> for SazonarError {
    fn from(msg: String) -> Self {
        SazonarError::Other(msg)
    }
}

/// Convenience alias for Sazonar results.
pub type Result<T> = std::result::Result<T, SazonarError>;
