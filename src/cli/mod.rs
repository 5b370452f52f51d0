//! CLI module for the actiongen generator
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate <model.json>` - Generate action classes for a compilation unit
//! - `list <model.json>` - Show which declarations would be generated
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::config::GeneratorConfig;
use crate::version::ACTIONGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Action dispatcher boilerplate generator
#[derive(Parser, Debug)]
#[command(name = "actiongen")]
#[command(version = ACTIONGEN_VERSION)]
#[command(about = "Generates action dispatcher boilerplate for Redux-style action containers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub conventions: ConventionArgs,
}

/// Overrides for the runtime naming conventions.
#[derive(Args, Debug, Default)]
pub struct ConventionArgs {
    /// Supertype marking action containers
    #[arg(long, global = true, value_name = "NAME")]
    pub container_marker: Option<String>,

    /// Field wrapper type marking dispatchable actions
    #[arg(long, global = true, value_name = "NAME")]
    pub dispatcher_marker: Option<String>,

    /// Identifier type used by the names class
    #[arg(long, global = true, value_name = "NAME")]
    pub action_name_type: Option<String>,

    /// Prefix of generated class names
    #[arg(long, global = true, value_name = "PREFIX", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub generated_prefix: Option<String>,

    /// Spaces per indentation level (0-16)
    #[arg(long, global = true, value_name = "WIDTH", value_parser = clap::value_parser!(u8).range(0..=16))]
    pub indent: Option<u8>,

    /// Do not emit the lint-suppression header
    #[arg(long, global = true)]
    pub no_header: bool,
}

impl ConventionArgs {
    /// Apply the overrides on top of the default configuration.
    pub fn to_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default().with_header(!self.no_header);
        if let Some(name) = &self.container_marker {
            config = config.with_container_marker(name.as_str());
        }
        if let Some(name) = &self.dispatcher_marker {
            config = config.with_dispatcher_marker(name.as_str());
        }
        if let Some(name) = &self.action_name_type {
            config = config.with_action_name_type(name.as_str());
        }
        if let Some(prefix) = &self.generated_prefix {
            config = config.with_generated_prefix(prefix.as_str());
        }
        if let Some(width) = self.indent {
            config = config.with_indent_width(usize::from(width));
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate action classes for a compilation unit
    Generate {
        /// Declaration model of the unit (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Fail if the output file is missing or out of date instead of writing it
        #[arg(long, requires = "output")]
        check: bool,
    },

    /// List the declarations that would be generated
    List {
        /// Declaration model of the unit (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.conventions.to_config();

    match cli.command {
        Command::Generate { model, output, check } => {
            commands::generate_file(&model, output.as_deref(), check, &config)
        }
        Command::List { model } => commands::list_file(&model, &config),
    }
}

// ============================================================================
// Tests
// ============================================================================
