//! The schema version registry (`schema_versions.json`)
//!
//! The registry classifies every published schema version into exactly
//! one of: `current` (at most one), `supported`, `deprecated`, or
//! `preview`. Example documents are validated only against versions in
//! the allowed set, the union of `supported` and `preview`; deprecated
//! versions stay on disk for historical reference but are never used to
//! accept new documents.

use crate::loader::{load_json_file, LoaderError, LoaderResult, REGISTRY_FILENAME};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parsed contents of `schema_versions.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaRegistry {
    /// The version new documents should be authored against.
    pub current: Option<String>,
    /// Versions accepted for validation.
    pub supported: Vec<String>,
    /// Retired versions, excluded from the allowed set.
    pub deprecated: Vec<String>,
    /// Pre-release versions, accepted for validation.
    pub preview: Vec<String>,
}

impl SchemaRegistry {
    /// Load the registry from `<schemas_root>/schema_versions.json`.
    pub fn load(schemas_root: &Path) -> LoaderResult<Self> {
        let path = schemas_root.join(REGISTRY_FILENAME);
        let value = load_json_file(&path)?;
        serde_json::from_value(value).map_err(|e| LoaderError::json_parse_error(path, e))
    }

    /// Versions examples may declare: `supported` then `preview`, in
    /// registry order.
    pub fn allowed_versions(&self) -> Vec<String> {
        let mut allowed = self.supported.clone();
        allowed.extend(self.preview.iter().cloned());
        allowed
    }

    /// Whether the given version is in the allowed set.
    pub fn is_allowed(&self, version: &str) -> bool {
        self.supported.iter().any(|v| v == version)
            || self.preview.iter().any(|v| v == version)
    }

    /// Every version the registry knows about, in classification order.
    pub fn known_versions(&self) -> Vec<String> {
        let mut versions = self.supported.clone();
        versions.extend(self.deprecated.iter().cloned());
        versions.extend(self.preview.iter().cloned());
        if let Some(current) = &self.current {
            if !versions.iter().any(|v| v == current) {
                versions.push(current.clone());
            }
        }
        versions
    }
}
