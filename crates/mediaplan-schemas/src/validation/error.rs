//! Error types for conformance checking

use crate::loader::LoaderError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for conformance operations
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// A single structural violation with its instance and schema context.
///
/// The validator's diagnostic is carried verbatim, never summarized.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// The validator's own description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of structural violations from one validation pass.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Errors raised while checking an example or a version's schema shape.
#[derive(Error, Debug)]
pub enum ConformanceError {
    /// The example has no `meta.schema_version`
    #[error("No schema_version specified in meta block of '{path}'")]
    MissingVersionDeclaration { path: PathBuf },

    /// The example declares a version outside the allowed set
    #[error("Schema version '{version}' is not supported (allowed: {allowed}) in file '{path}'")]
    UnsupportedVersion {
        version: String,
        allowed: String,
        path: PathBuf,
    },

    /// A version directory lacks a schema file it must carry
    #[error("Required schema '{filename}' missing for version '{version}'")]
    MissingRequiredSchemaFile { version: String, filename: String },

    /// A version referenced by an example has no schema directory
    #[error("Schema directory missing for version '{version}' referenced in '{path}'")]
    ReferencedVersionMissing { version: String, path: PathBuf },

    /// The compiled validator could not be built from the schema set
    #[error("Failed to build validator for schema '{schema_name}': {reason}")]
    ValidatorBuild { schema_name: String, reason: String },

    /// The example does not conform to its declared schema
    #[error("Validation failed for '{path}':\n{violations}")]
    ValidationFailed {
        path: PathBuf,
        violations: ValidationViolations,
    },

    /// Schema or example loading failures (missing directory included;
    /// NOT recovered here, unlike in the documentation driver)
    #[error(transparent)]
    Loader(#[from] LoaderError),
}
