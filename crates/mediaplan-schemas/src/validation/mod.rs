//! Conformance validation of example media plan documents
//!
//! Every example document declares the schema version it conforms to in
//! `meta.schema_version`. Validation loads the full schema set for that
//! version, resolves cross-file `$ref`s from the loaded set, and
//! surfaces structural violations verbatim.

pub mod conformance;
pub mod error;

pub use conformance::{ConformanceChecker, ExampleOutcome};
pub use error::{ConformanceError, ConformanceResult, ValidationViolations, Violation};
