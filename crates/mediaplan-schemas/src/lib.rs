//! Mediaplan Schemas - versioned media plan JSON Schema tooling
//!
//! This crate works with a family of hand-written JSON Schemas describing
//! advertising media plans (campaigns, line items, and a controlled
//! dictionary of custom fields and metrics). Schema files live in
//! per-version directories alongside a `schema_versions.json` registry
//! classifying every version as current, supported, deprecated, or
//! preview.
//!
//! Two facilities are built on that layout:
//!
//! - **Documentation generation**: [`documentation::DocGenerator`] flattens
//!   each schema's `properties` into field rows and writes a multi-sheet
//!   `.xlsx` reference workbook into the version's schema directory.
//! - **Conformance validation**: [`validation::ConformanceChecker`]
//!   validates example media plan documents against the schema set
//!   registered for their declared version, resolving cross-file `$ref`s
//!   from the preloaded set.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mediaplan_schemas::documentation::DocGenerator;
//!
//! let generator = DocGenerator::new("schemas");
//! let report = generator.generate("2.0").unwrap();
//! for sheet in &report.sheets {
//!     println!("{}: {} rows", sheet.name, sheet.rows);
//! }
//! ```
//!
//! ## Ordering
//!
//! Documentation row order follows the source schema's `properties`
//! insertion order. `serde_json` is used with the `preserve_order`
//! feature; swapping in an unordered map would silently reorder the
//! generated sheets.

pub mod documentation;
pub mod loader;
pub mod validation;
pub mod versioning;

// Re-export commonly used types for convenience
pub use documentation::{DocGenerator, FieldRow, GenerationReport, GeneratorError, SheetSummary};
pub use loader::{LoaderError, LoaderResult, SchemaSet, REGISTRY_FILENAME};
pub use validation::{
    ConformanceChecker, ConformanceError, ConformanceResult, Violation, ValidationViolations,
};
pub use versioning::{shape_for, SchemaRegistry, VersionShape};
