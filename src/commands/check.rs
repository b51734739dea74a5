//! Implementation of the `envlint check` command.
//!
//! Loads the env file, runs schema validation, and renders the result in the
//! requested format.

use crate::cli::{CheckArgs, OutputFormat};
use crate::error::{EnvLintError, Result};
use crate::validate::{ValidationReport, validate_env_file};
use serde_json::json;

/// Execute the `envlint check` command.
///
/// # Exit Codes
///
/// - 0: File parsed and passed every schema rule
/// - 1: User error (file unreadable)
/// - 2: Validation failure (one or more schema violations)
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let errors = validate_env_file(&args.path)?;
    let report = ValidationReport::from_errors(errors);

    match args.format {
        OutputFormat::Text => {
            if report.passed {
                if !args.quiet {
                    println!("{}: OK", args.path.display());
                }
            } else {
                print!("{}", report.format_error());
            }
        }
        OutputFormat::Json => {
            let payload = json!({
                "path": args.path.display().to_string(),
                "passed": report.passed,
                "errors": report.errors,
            });
            println!("{}", payload);
        }
    }

    if report.passed {
        Ok(())
    } else {
        Err(EnvLintError::ValidationFailed(report.errors.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::validate::schema::REQUIRED_KEYS;
    use std::path::PathBuf;

    fn check_args(path: PathBuf) -> CheckArgs {
        CheckArgs {
            path,
            format: OutputFormat::Text,
            quiet: true,
        }
    }

    fn write_valid_env(path: &std::path::Path) {
        let mut content = String::new();
        for &key in REQUIRED_KEYS {
            let value = match key {
                "N8N_BASIC_AUTH_ACTIVE" | "OLLAMA_GPU" => "true",
                "REDIS_PASSWORD" => "",
                "N8N_PROTOCOL" => "https",
                "TRAEFIK_LOG_LEVEL" => "INFO",
                "N8N_PORT" => "5678",
                "QUEUE_BULL_REDIS_PORT" => "6379",
                "QUEUE_BULL_REDIS_DB" => "0",
                _ => "value",
            };
            content.push_str(&format!("{}={}\n", key, value));
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn check_passes_on_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        write_valid_env(&env_path);

        assert!(cmd_check(check_args(env_path)).is_ok());
    }

    #[test]
    fn check_fails_with_validation_exit_code_on_violations() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "N8N_PORT=12a\n").unwrap();

        let err = cmd_check(check_args(env_path)).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(matches!(err, EnvLintError::ValidationFailed(_)));
    }

    #[test]
    fn check_fails_with_user_error_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.env");

        let err = cmd_check(check_args(missing)).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn check_json_format_still_signals_failure() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "OLLAMA_GPU=maybe\n").unwrap();

        let args = CheckArgs {
            path: env_path,
            format: OutputFormat::Json,
            quiet: false,
        };
        let err = cmd_check(args).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }
}
