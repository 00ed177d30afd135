//! Store error types.
//!
//! Defined in `markbook-core` so callers can match on error kinds and decide
//! how to surface them without string matching. The presentation layer owns
//! all user-facing wording; these messages are for logs and `Error: {e:#}`
//! style output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the record store and the marks-file codec.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The marks file does not exist. Recoverable: callers may continue
    /// with an empty store.
    #[error("marks file not found: {0}")]
    FileNotFound(PathBuf),

    /// No record matches the given key or name.
    #[error("no record matches '{0}'")]
    NoSuchRecord(String),

    /// The marks file is malformed. Not recovered per-line; the whole load
    /// fails.
    #[error("marks file line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// User-supplied input was rejected. The store is left unchanged.
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// An aggregate or extreme query was made against an empty store.
    #[error("no student records loaded")]
    Empty,

    /// An underlying I/O failure while reading or writing the marks file.
    #[error("marks file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization or deserialization failed.
    #[error("report JSON error: {0}")]
    Report(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns `true` for errors a caller can sensibly continue from by
    /// treating the store as absent or empty.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoreError::FileNotFound(_) | StoreError::Empty)
    }

    fn validation(field: &str, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Shorthand used by the store when rejecting a non-integer score.
pub(crate) fn bad_score(field: &str, raw: &str) -> StoreError {
    StoreError::validation(field, format!("'{raw}' is not a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_classification() {
        assert!(StoreError::FileNotFound(PathBuf::from("x.txt")).is_recoverable());
        assert!(StoreError::Empty.is_recoverable());
        assert!(!StoreError::NoSuchRecord("jo".into()).is_recoverable());
        assert!(!StoreError::Format {
            line: 3,
            reason: "expected 6 fields".into()
        }
        .is_recoverable());
    }

    #[test]
    fn messages_name_the_offender() {
        let err = bad_score("exam", "ninety");
        assert_eq!(err.to_string(), "invalid exam: 'ninety' is not a non-negative integer");
    }
}
