//! Schema version registry and per-version shape descriptions

pub mod registry;
pub mod shape;

pub use registry::SchemaRegistry;
pub use shape::{dictionary_definition_for_group, shape_for, RequiredRule, VersionShape};
