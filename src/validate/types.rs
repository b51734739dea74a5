//! Core types for env validation results.

use serde::Serialize;
use std::fmt;

/// A single schema violation detected in an env file.
///
/// Equality is structural (key + message), so tests can assert on expected
/// error values directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The offending configuration key, absent for file-level problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Create a violation tied to a specific key.
    pub fn for_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            message: message.into(),
        }
    }

    /// Create a file-level violation not tied to any key.
    pub fn file_level(message: impl Into<String>) -> Self {
        Self {
            key: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}: {}", key, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Result of validating one env file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether validation passed (no violations found).
    pub passed: bool,
    /// List of violations (empty if passed).
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Build a report from a list of violations; empty means pass.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            passed: errors.is_empty(),
            errors,
        }
    }

    /// Format the report as user-friendly console lines, one per violation.
    pub fn format_error(&self) -> String {
        if self.passed {
            return String::new();
        }

        let mut msg = String::new();
        for error in &self.errors {
            msg.push_str(&format!("{}\n", error));
        }
        msg
    }
}
