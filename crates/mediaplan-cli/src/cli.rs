//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Mediaplan CLI - media plan schema documentation and validation
///
/// Generates spreadsheet reference documentation from the versioned
/// media plan JSON Schemas and validates example documents against the
/// schema version they declare.
#[derive(Parser, Debug)]
#[command(
    name = "mediaplan",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MEDIAPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether colored output should be used
    pub fn use_color(&self) -> bool {
        use is_terminal::IsTerminal;
        !self.no_color && std::io::stdout().is_terminal()
    }

    /// Effective verbosity level
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the reference workbook for one or more schema versions
    Document(DocumentArgs),

    /// Validate example documents against their declared schema version
    Validate(ValidateArgs),

    /// Show the schema version registry
    Versions(VersionsArgs),
}

/// Arguments for the document command
#[derive(Parser, Debug)]
pub struct DocumentArgs {
    /// Schema versions to document (e.g. "2.0")
    #[arg(value_name = "VERSION")]
    pub versions: Vec<String>,

    /// Document every version known to the registry
    #[arg(long, conflicts_with = "versions")]
    pub all: bool,

    /// Root directory containing the versioned schemas
    #[arg(long, value_name = "DIR")]
    pub schemas_dir: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// A single example document to validate; the whole examples
    /// directory when omitted
    #[arg(value_name = "EXAMPLE")]
    pub example: Option<PathBuf>,

    /// Root directory containing the versioned schemas
    #[arg(long, value_name = "DIR")]
    pub schemas_dir: Option<PathBuf>,

    /// Directory containing example documents
    #[arg(long, value_name = "DIR")]
    pub examples_dir: Option<PathBuf>,
}

/// Arguments for the versions command
#[derive(Parser, Debug)]
pub struct VersionsArgs {
    /// Root directory containing the versioned schemas
    #[arg(long, value_name = "DIR")]
    pub schemas_dir: Option<PathBuf>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}
