//! Parsing of env file lines into a key→value mapping.

use super::comments::strip_comments;
use crate::error::{EnvLintError, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed env file contents. Keys are unique; on duplicate assignment the
/// last occurrence wins.
pub type EnvMap = BTreeMap<String, String>;

/// Parse raw env file lines into a mapping.
///
/// For each line: strip comments, skip lines that are empty or contain no
/// `=`, split on the first `=` only (values may contain `=` themselves),
/// trim key and value, skip entries with an empty key, and remove one layer
/// of matching surrounding quotes from the value.
pub fn parse_env_lines<I, S>(lines: I) -> EnvMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut data = EnvMap::new();
    for raw_line in lines {
        let line = strip_comments(raw_line.as_ref());
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            continue;
        }
        data.insert(key.to_string(), unquote(value).to_string());
    }
    data
}

/// Load an env file into a mapping.
///
/// This is the only operation that touches the filesystem; everything else
/// in the parser is pure. Read failures (missing file, permissions, invalid
/// UTF-8) surface as `EnvLintError::Io` with the original error as source.
pub fn load_env_file<P: AsRef<Path>>(path: P) -> Result<EnvMap> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| EnvLintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_env_lines(content.lines()))
}

/// Strip one layer of matching surrounding quotes (`"` or `'`).
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && bytes[0] == bytes[bytes.len() - 1]
        && (bytes[0] == b'"' || bytes[0] == b'\'')
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
