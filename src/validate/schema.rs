//! The fixed env schema for the deployment stack.
//!
//! These constants are process-wide immutable data, safe to share across
//! concurrent validation calls. The schema is compiled in and not
//! user-configurable in this version.
//!
//! Slice order matters: validation iterates each slice in declaration order
//! so repeated runs on identical input produce identical error sequences.

/// Keys that must be present in the env file, in validation order.
pub const REQUIRED_KEYS: &[&str] = &[
    "COMPOSE_PROJECT_NAME",
    "TZ",
    "TRAEFIK_ACME_EMAIL",
    "TRAEFIK_DOMAIN",
    "TRAEFIK_DASHBOARD_DOMAIN",
    "TRAEFIK_LOG_LEVEL",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "POSTGRES_DB",
    "REDIS_PASSWORD",
    "N8N_HOST",
    "N8N_PORT",
    "N8N_PROTOCOL",
    "N8N_ENCRYPTION_KEY",
    "N8N_BASIC_AUTH_ACTIVE",
    "N8N_BASIC_AUTH_USER",
    "N8N_BASIC_AUTH_PASSWORD",
    "N8N_JWT_SECRET",
    "N8N_EDITOR_BASE_URL",
    "N8N_API_BASE_URL",
    "QUEUE_BULL_REDIS_HOST",
    "QUEUE_BULL_REDIS_PORT",
    "QUEUE_BULL_REDIS_DB",
    "OPEN_WEBUI_DOMAIN",
    "OLLAMA_GPU",
    "COMFYUI_DOMAIN",
    "COMFYUI_GIT_REF",
];

/// Required keys permitted to hold an empty value.
pub const ALLOW_EMPTY_KEYS: &[&str] = &["REDIS_PASSWORD"];

/// Keys whose value must be "true" or "false" (case-insensitive).
pub const BOOLEAN_KEYS: &[&str] = &["N8N_BASIC_AUTH_ACTIVE", "OLLAMA_GPU"];

/// Keys whose non-empty value must be a non-negative decimal integer.
pub const NUMERIC_KEYS: &[&str] = &["N8N_PORT", "QUEUE_BULL_REDIS_PORT", "QUEUE_BULL_REDIS_DB"];

/// The key holding the service protocol, checked lower-cased.
pub const PROTOCOL_KEY: &str = "N8N_PROTOCOL";

/// Accepted protocol values.
pub const PROTOCOLS: &[&str] = &["http", "https"];

/// The key holding the proxy log level, checked upper-cased.
pub const LOG_LEVEL_KEY: &str = "TRAEFIK_LOG_LEVEL";

/// Accepted log level values.
pub const LOG_LEVELS: &[&str] = &["DEBUG", "INFO", "WARN", "WARNING", "ERROR"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_27_required_keys() {
        assert_eq!(REQUIRED_KEYS.len(), 27);
    }

    #[test]
    fn sub_rule_keys_are_all_required() {
        for key in ALLOW_EMPTY_KEYS
            .iter()
            .chain(BOOLEAN_KEYS)
            .chain(NUMERIC_KEYS)
            .chain(&[PROTOCOL_KEY, LOG_LEVEL_KEY])
        {
            assert!(
                REQUIRED_KEYS.contains(key),
                "sub-rule key '{}' must appear in REQUIRED_KEYS",
                key
            );
        }
    }

    #[test]
    fn required_keys_are_unique() {
        for (i, a) in REQUIRED_KEYS.iter().enumerate() {
            for b in &REQUIRED_KEYS[i + 1..] {
                assert_ne!(a, b, "duplicate required key");
            }
        }
    }
}
