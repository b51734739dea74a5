//! Line-oriented parser for `.env` files.
//!
//! This module converts raw text lines into a key→value mapping:
//! - Comment stripping: a comment begins at the first unescaped `#`
//! - Quote removal: one layer of matching surrounding quotes on values
//! - Whitespace trimming on keys and values
//! - Duplicate keys: last occurrence wins
//!
//! Malformed lines (no `=`, empty key) are silently skipped, never reported —
//! schema violations are the `validate` module's job.

mod comments;
mod lines;


// Re-export public API
pub use comments::strip_comments;
pub use lines::{EnvMap, load_env_file, parse_env_lines};
