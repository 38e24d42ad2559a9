//! Error types for schema loading operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error types for schema loading operations
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The requested schema file does not exist
    #[error("Schema file not found: '{path}'")]
    SchemaNotFound { path: PathBuf },

    /// The requested version has no schema directory on disk
    #[error("Schema directory not found for version '{version}': '{path}'")]
    DirectoryMissing { version: String, path: PathBuf },

    /// File I/O errors
    #[error("Failed to read '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoaderError {
    /// Create a schema-not-found error
    pub fn schema_not_found(path: PathBuf) -> Self {
        Self::SchemaNotFound { path }
    }

    /// Create a missing-directory error
    pub fn directory_missing(version: impl Into<String>, path: PathBuf) -> Self {
        Self::DirectoryMissing {
            version: version.into(),
            path,
        }
    }

    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::IoError { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParseError { path, source }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::SchemaNotFound { path } => path,
            Self::DirectoryMissing { path, .. } => path,
            Self::IoError { path, .. } => path,
            Self::JsonParseError { path, .. } => path,
        }
    }
}
