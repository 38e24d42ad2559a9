//! Loading schema files from versioned directories
//!
//! The on-disk layout is one subdirectory per schema version under a
//! common root, e.g. `schemas/2.0/mediaplan.schema.json`, with the
//! version registry `schemas/schema_versions.json` at the root.

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Filename of the version registry, excluded from version schema sets.
pub const REGISTRY_FILENAME: &str = "schema_versions.json";

/// Read and parse a single JSON file.
///
/// # Errors
///
/// Returns `SchemaNotFound` if the path does not exist, `IoError` if it
/// cannot be read, and `JsonParseError` if the content is not valid JSON.
pub fn load_json_file(path: &Path) -> LoaderResult<Value> {
    if !path.exists() {
        return Err(LoaderError::schema_not_found(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

    serde_json::from_str(&content)
        .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
}

/// All schema files loaded for one schema version, keyed by filename.
///
/// Enumerates every `*.json` file in the version's subdirectory except
/// the registry file. Owned transiently; nothing is cached between
/// loads.
#[derive(Debug, Clone)]
pub struct SchemaSet {
    version: String,
    directory: PathBuf,
    schemas: HashMap<String, Value>,
}

impl SchemaSet {
    /// Load all schema files for a version from `<schemas_root>/<version>/`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryMissing` if the version has no subdirectory, and
    /// the usual file errors for unreadable or malformed schema files.
    pub fn load(schemas_root: &Path, version: &str) -> LoaderResult<Self> {
        let directory = schemas_root.join(version);
        if !directory.is_dir() {
            return Err(LoaderError::directory_missing(version, directory));
        }

        let entries = std::fs::read_dir(&directory)
            .map_err(|e| LoaderError::io_error(directory.clone(), e))?;

        let mut schemas = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| LoaderError::io_error(directory.clone(), e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".json") || name == REGISTRY_FILENAME {
                continue;
            }
            schemas.insert(name.to_string(), load_json_file(&path)?);
        }

        Ok(Self {
            version: version.to_string(),
            directory,
            schemas,
        })
    }

    /// The schema version this set was loaded for.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The version's schema directory on disk.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Look up a loaded schema by filename.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Whether a schema file with the given name was loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Names of all loaded schemas, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Number of loaded schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over `(filename, schema)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.schemas.iter()
    }
}
