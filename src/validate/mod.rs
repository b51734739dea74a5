//! Schema validation for parsed env files.
//!
//! This module checks a parsed key→value mapping against the fixed deployment
//! schema and accumulates every violation into a flat, deterministically
//! ordered error list:
//! - Required keys: presence and non-empty values (with allow-empty exceptions)
//! - Boolean keys: case-insensitive "true"/"false"
//! - Enumerated keys: protocol and log-level value sets
//! - Numeric keys: non-negative decimal integers

pub mod schema;
pub mod types;
mod validator;


// Re-export public API
pub use types::{ValidationError, ValidationReport};
pub use validator::{validate_env, validate_env_file};
