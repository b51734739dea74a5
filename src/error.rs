//! Error types for the envlint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Schema violations are *not* represented here: they are collected as
//! `validate::ValidationError` values and returned to the caller. This enum
//! covers the failures that abort a run — unreadable files, bad invocations —
//! plus the terminal "validation failed" outcome the CLI layer uses to pick
//! its exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for envlint operations.
///
/// Each variant maps to a specific exit code. `UserError` is reserved for
/// invocation problems outside clap's own argument diagnostics.
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum EnvLintError {
    /// The env file could not be read. The original `std::io::Error` is kept
    /// as the source so callers can inspect its kind (not found, permission
    /// denied, invalid UTF-8).
    #[error("failed to read env file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// The env file violated one or more schema rules.
    #[error("validation failed: {0} problem(s) found")]
    ValidationFailed(usize),
}

impl EnvLintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvLintError::Io { .. } => exit_codes::USER_ERROR,
            EnvLintError::UserError(_) => exit_codes::USER_ERROR,
            EnvLintError::ValidationFailed(_) => exit_codes::VALIDATION_FAILURE,
        }
    }

    /// The kind of the underlying I/O error, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            EnvLintError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

/// Result type alias for envlint operations.
pub type Result<T> = std::result::Result<T, EnvLintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_has_user_error_exit_code() {
        let err = EnvLintError::Io {
            path: PathBuf::from(".env"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = EnvLintError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.io_kind(), None);
    }

    #[test]
    fn validation_failed_has_correct_exit_code() {
        let err = EnvLintError::ValidationFailed(3);
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = EnvLintError::Io {
            path: PathBuf::from("deploy/.env"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("deploy/.env"));

        let err = EnvLintError::ValidationFailed(2);
        assert_eq!(err.to_string(), "validation failed: 2 problem(s) found");
    }
}
