//! Schema file and version-directory loading
//!
//! Schemas are plain JSON files on disk, grouped into one subdirectory
//! per schema version. Loading is transient: nothing is cached across
//! invocations, and every function returns freshly parsed values.

pub mod error;
pub mod schema_loader;

pub use error::{LoaderError, LoaderResult};
pub use schema_loader::{load_json_file, SchemaSet, REGISTRY_FILENAME};
