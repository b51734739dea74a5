//! CLI argument parsing for envlint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Envlint: schema validator for .env files in deployment pipelines.
///
/// Checks an env file against the fixed deployment schema (required keys,
/// boolean/numeric/enumerated value rules) and reports every violation
/// before the stack is brought up.
#[derive(Parser, Debug)]
#[command(name = "envlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for envlint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an env file against the deployment schema.
    ///
    /// Prints one line per violation and exits with code 2 if any are found.
    Check(CheckArgs),
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the env file to validate.
    #[arg(default_value = ".env")]
    pub path: PathBuf,

    /// Output format for the validation result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress the success line when the file is valid.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for validation results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendered line per violation, suitable for console output.
    #[default]
    Text,
    /// A single JSON object with path, pass state, and error list.
    Json,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
