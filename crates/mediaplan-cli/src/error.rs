//! Error types and handling for the CLI

use colored::Colorize;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Schema loading error
    #[error(transparent)]
    Loader(#[from] mediaplan_schemas::LoaderError),

    /// Documentation generation error
    #[error(transparent)]
    Generator(#[from] mediaplan_schemas::GeneratorError),

    /// Conformance checking error
    #[error(transparent)]
    Conformance(#[from] mediaplan_schemas::ConformanceError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// One or more examples or version shapes failed validation
    #[error("{failures} of {total} checks failed")]
    ChecksFailed { failures: usize, total: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Loader(_) => 2,
            Self::Generator(_) => 3,
            Self::Conformance(_) => 4,
            Self::FileNotFound { .. } => 5,
            Self::Config(_) => 6,
            Self::InvalidArgs(_) => 7,
            Self::ChecksFailed { .. } => 8,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Format an error for terminal display
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        format!("{} {}", "error:".red().bold(), error)
    } else {
        format!("error: {error}")
    }
}
