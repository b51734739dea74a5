//! Core validation logic for env file schema checks.

use crate::error::Result;
use crate::parser::{EnvMap, load_env_file};
use std::path::Path;

use super::schema::{
    ALLOW_EMPTY_KEYS, BOOLEAN_KEYS, LOG_LEVEL_KEY, LOG_LEVELS, NUMERIC_KEYS, PROTOCOL_KEY,
    PROTOCOLS, REQUIRED_KEYS,
};
use super::types::ValidationError;

/// Validate a parsed env mapping against the fixed schema.
///
/// Rules run in a fixed order and never stop early, so every applicable
/// violation is reported in a single pass and repeated runs on identical
/// input produce identical error sequences:
///
/// 1. Required keys, in schema order: missing key, or empty value where the
///    key is not in the allow-empty set. A missing key skips its empty-value
///    check (one error per absent key, not two).
/// 2. Boolean keys: value must be "true" or "false", case-insensitive.
/// 3. Protocol key: lower-cased value must be an accepted protocol.
/// 4. Log-level key: upper-cased value must be an accepted level.
/// 5. Numeric keys: non-empty values must be all ASCII decimal digits
///    (emptiness is rule 1's concern, not a numeric violation).
///
/// Absent non-required keys are never an error at this layer.
pub fn validate_env(env: &EnvMap) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for &key in REQUIRED_KEYS {
        let Some(value) = env.get(key) else {
            errors.push(ValidationError::for_key(key, "missing variable"));
            continue;
        };
        if value.is_empty() && !ALLOW_EMPTY_KEYS.contains(&key) {
            errors.push(ValidationError::for_key(key, "missing required value"));
        }
    }

    for &key in BOOLEAN_KEYS {
        if let Some(value) = env.get(key)
            && !value.eq_ignore_ascii_case("true")
            && !value.eq_ignore_ascii_case("false")
        {
            errors.push(ValidationError::for_key(
                key,
                "invalid boolean value, use 'true' or 'false'",
            ));
        }
    }

    if let Some(protocol) = env.get(PROTOCOL_KEY)
        && !protocol.is_empty()
        && !PROTOCOLS.contains(&protocol.to_lowercase().as_str())
    {
        errors.push(ValidationError::for_key(
            PROTOCOL_KEY,
            "invalid protocol (http/https)",
        ));
    }

    if let Some(log_level) = env.get(LOG_LEVEL_KEY)
        && !log_level.is_empty()
        && !LOG_LEVELS.contains(&log_level.to_uppercase().as_str())
    {
        errors.push(ValidationError::for_key(LOG_LEVEL_KEY, "invalid log level"));
    }

    for &key in NUMERIC_KEYS {
        if let Some(value) = env.get(key)
            && !value.is_empty()
            && !value.chars().all(|c| c.is_ascii_digit())
        {
            errors.push(ValidationError::for_key(key, "must be a positive integer"));
        }
    }

    errors
}

/// Validate the env file at `path`.
///
/// Composes `load_env_file` and `validate_env`. I/O failures propagate as
/// `EnvLintError::Io` and are never converted into validation errors.
pub fn validate_env_file<P: AsRef<Path>>(path: P) -> Result<Vec<ValidationError>> {
    let env = load_env_file(path)?;
    Ok(validate_env(&env))
}
