//! Conformance checking of examples against their declared schema version
//!
//! The check sequence for one example: read the declared
//! `meta.schema_version`, confirm it against the registry's allowed set,
//! load every schema file for that version, confirm the root
//! `mediaplan.schema.json` is present, then validate the instance with
//! all schemas registered for `$ref` resolution. Cross-file references
//! use bare filenames (e.g. `"campaign.schema.json#/properties/id"`),
//! resolved from the preloaded set without touching the network.

use crate::loader::{load_json_file, SchemaSet};
use crate::validation::error::{
    ConformanceError, ConformanceResult, ValidationViolations, Violation,
};
use crate::versioning::{shape_for, SchemaRegistry};
use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Root schema every version must provide.
pub const ROOT_SCHEMA: &str = "mediaplan.schema.json";

/// Resolves `$ref` URIs against the schemas loaded for one version.
///
/// Registered under bare filenames and each schema's own `$id`. Unknown
/// URIs (such as draft metaschemas) resolve to a permissive empty
/// schema so validation never reaches for the network.
struct PreloadedSchemaRetriever {
    schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for PreloadedSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(value) = self.schemas_by_uri.get(uri_str) {
            return Ok(value.clone());
        }

        // Fall back to the trailing filename so relative and absolute
        // spellings of the same reference both resolve.
        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        let filename = filename.split('#').next().unwrap_or(filename);
        if let Some(value) = self.schemas_by_uri.get(filename) {
            return Ok(value.clone());
        }

        Ok(serde_json::json!({}))
    }
}

/// Outcome of checking one example file.
#[derive(Debug)]
pub struct ExampleOutcome {
    pub path: PathBuf,
    pub result: ConformanceResult<String>,
}

/// Validates example documents and version directories against the
/// registry.
#[derive(Debug)]
pub struct ConformanceChecker {
    schemas_root: PathBuf,
    registry: SchemaRegistry,
}

impl ConformanceChecker {
    /// Create a checker from an already-loaded registry.
    pub fn new(schemas_root: impl Into<PathBuf>, registry: SchemaRegistry) -> Self {
        Self {
            schemas_root: schemas_root.into(),
            registry,
        }
    }

    /// Create a checker, loading the registry from the schemas root.
    pub fn open(schemas_root: impl Into<PathBuf>) -> ConformanceResult<Self> {
        let schemas_root = schemas_root.into();
        let registry = SchemaRegistry::load(&schemas_root)?;
        Ok(Self::new(schemas_root, registry))
    }

    /// The registry backing this checker.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Extract the version an example declares in `meta.schema_version`.
    pub fn declared_version(instance: &Value, path: &Path) -> ConformanceResult<String> {
        instance
            .get("meta")
            .and_then(|meta| meta.get("schema_version"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| ConformanceError::MissingVersionDeclaration {
                path: path.to_path_buf(),
            })
    }

    /// Validate one example file against its declared schema version.
    ///
    /// Returns the declared version on success.
    pub fn check_example_file(&self, path: &Path) -> ConformanceResult<String> {
        let instance = load_json_file(path)?;
        self.check_example_value(&instance, path)
    }

    /// Validate an already-parsed example against its declared version.
    pub fn check_example_value(&self, instance: &Value, path: &Path) -> ConformanceResult<String> {
        let version = Self::declared_version(instance, path)?;

        if !self.registry.is_allowed(&version) {
            return Err(ConformanceError::UnsupportedVersion {
                version,
                allowed: self.registry.allowed_versions().join(", "),
                path: path.to_path_buf(),
            });
        }

        let schemas = SchemaSet::load(&self.schemas_root, &version)?;
        let validator = self.build_validator(&schemas)?;

        let violations: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            tracing::debug!(path = %path.display(), %version, "Example conforms");
            Ok(version)
        } else {
            Err(ConformanceError::ValidationFailed {
                path: path.to_path_buf(),
                violations: ValidationViolations::new(violations),
            })
        }
    }

    /// Build a validator for the root mediaplan schema with every schema
    /// in the set registered for `$ref` resolution.
    fn build_validator(&self, schemas: &SchemaSet) -> ConformanceResult<Validator> {
        let root = schemas
            .get(ROOT_SCHEMA)
            .ok_or_else(|| ConformanceError::MissingRequiredSchemaFile {
                version: schemas.version().to_string(),
                filename: ROOT_SCHEMA.to_string(),
            })?;

        let mut schemas_by_uri = HashMap::new();
        for (filename, value) in schemas.iter() {
            schemas_by_uri.insert(filename.clone(), value.clone());
            if let Some(id) = value.get("$id").and_then(|v| v.as_str()) {
                schemas_by_uri.insert(id.to_string(), value.clone());
            }
        }

        let mut opts = jsonschema::options();
        opts.with_retriever(PreloadedSchemaRetriever { schemas_by_uri });
        opts.build(root)
            .map_err(|e| ConformanceError::ValidatorBuild {
                schema_name: ROOT_SCHEMA.to_string(),
                reason: e.to_string(),
            })
    }

    /// Check that a version's directory carries every schema file its
    /// shape requires.
    pub fn check_version_shape(&self, version: &str) -> ConformanceResult<()> {
        let schemas = SchemaSet::load(&self.schemas_root, version)?;
        for filename in shape_for(version).required_files {
            if !schemas.contains(filename) {
                return Err(ConformanceError::MissingRequiredSchemaFile {
                    version: version.to_string(),
                    filename: (*filename).to_string(),
                });
            }
        }
        Ok(())
    }

    /// Check every allowed version's schema shape.
    pub fn check_allowed_version_shapes(&self) -> Vec<(String, ConformanceResult<()>)> {
        self.registry
            .allowed_versions()
            .into_iter()
            .map(|version| {
                let result = self.check_version_shape(&version);
                (version, result)
            })
            .collect()
    }

    /// Validate every `*.json` example in a directory independently.
    ///
    /// One file's failure never prevents evaluation of the others.
    pub fn check_examples_dir(&self, examples_dir: &Path) -> ConformanceResult<Vec<ExampleOutcome>> {
        let mut outcomes = Vec::new();
        for path in example_paths(examples_dir)? {
            let result = self.check_example_file(&path);
            outcomes.push(ExampleOutcome { path, result });
        }
        Ok(outcomes)
    }

    /// Confirm every version referenced by an example has a schema
    /// directory on disk.
    pub fn check_referenced_versions(
        &self,
        examples_dir: &Path,
    ) -> ConformanceResult<Vec<(PathBuf, ConformanceResult<()>)>> {
        let mut outcomes = Vec::new();
        for path in example_paths(examples_dir)? {
            let result = (|| {
                let instance = load_json_file(&path)?;
                // Examples without a declaration are reported by the
                // per-example check; here only declared versions matter.
                let Ok(version) = Self::declared_version(&instance, &path) else {
                    return Ok(());
                };
                if self.schemas_root.join(&version).is_dir() {
                    Ok(())
                } else {
                    Err(ConformanceError::ReferencedVersionMissing {
                        version,
                        path: path.clone(),
                    })
                }
            })();
            outcomes.push((path, result));
        }
        Ok(outcomes)
    }
}

/// Sorted `*.json` paths in the examples directory.
fn example_paths(examples_dir: &Path) -> ConformanceResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(examples_dir)
        .map_err(|e| crate::loader::LoaderError::io_error(examples_dir.to_path_buf(), e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e == "json")
        })
        .collect();
    paths.sort();
    Ok(paths)
}
