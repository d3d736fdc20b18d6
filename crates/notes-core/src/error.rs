//! Error types for notes core operations.
//!
//! Errors are descriptive at the core level; the CLI layer decides how each
//! one is reported and whether the session degrades or continues.

use thiserror::Error;

/// Result type alias for notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for notes operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Storage backend error (open, read, write, flush)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Why a date string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    /// Not exactly three dot-separated parts
    #[error("expected dd.mm.yyyy")]
    Format,

    /// A part is not an integer or is out of range
    #[error("day must be 1-31, month 1-12, year at least 1")]
    Values,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_message() {
        let err = NotesError::Storage("Failed to open notes: denied".to_string());
        assert_eq!(err.to_string(), "Storage error: Failed to open notes: denied");
    }

    #[test]
    fn test_date_error_messages() {
        assert_eq!(DateError::Format.to_string(), "expected dd.mm.yyyy");
        assert!(DateError::Values.to_string().contains("year at least 1"));
    }
}
