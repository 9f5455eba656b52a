//! Error types for gridthings-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridthings-core
///
/// Out-of-bounds traversal is not an error: the peek family returns a
/// sentinel cell instead. Only hard lookups report [`Error::OutOfRange`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No cell is stored at the requested coordinate
    #[error("No cell at row {row}, column {col}")]
    OutOfRange { row: usize, col: usize },

    /// A value search found no matching element
    #[error("Not found: {0}")]
    NotFound(String),

    /// An operation was invoked in a state that does not allow it
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// A cell value was rejected while building a grid
    #[error("Invalid value at row {row}, column {col}: {message}")]
    Validation {
        row: usize,
        col: usize,
        message: String,
    },

    /// Values of incompatible types met in a comparison or aggregate
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Construction options cannot be applied
    #[error("Invalid options: {0}")]
    InvalidOptions(&'static str),
}

impl Error {
    /// Create a validation error for the cell at `(row, col)`
    pub fn validation<S: Into<String>>(row: usize, col: usize, message: S) -> Self {
        Error::Validation {
            row,
            col,
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::OutOfRange { row: 3, col: 1 }.to_string(),
            "No cell at row 3, column 1"
        );
        assert_eq!(
            Error::validation(0, 2, "not an integer").to_string(),
            "Invalid value at row 0, column 2: not an integer"
        );
        assert_eq!(
            Error::InvalidState("cursor not set").to_string(),
            "Invalid state: cursor not set"
        );
    }
}
