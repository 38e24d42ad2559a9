//! Schema documentation generation
//!
//! Flattens the versioned media plan schemas into tabular field rows
//! and writes them as a multi-sheet `.xlsx` reference workbook.

pub mod extract;
pub mod generator;
pub mod workbook;

pub use extract::FieldRow;
pub use generator::{DocGenerator, GenerationReport, GeneratorError, SheetSummary};
pub use workbook::{write_sheet, COLUMN_HEADERS};
