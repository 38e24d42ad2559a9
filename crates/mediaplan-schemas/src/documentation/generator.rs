//! Documentation driver
//!
//! Orchestrates one documentation run: load the version's schema files,
//! run each extraction variant, render the sheets, and save the
//! workbook into the version's schema directory.

use crate::documentation::extract::{
    self, FieldRow,
};
use crate::documentation::workbook::write_sheet;
use crate::loader::{load_json_file, LoaderError};
use crate::versioning::shape_for;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors during a documentation run
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Schema loading failures, including the missing version directory
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Workbook assembly or save failures
    #[error("Failed to write workbook: {0}")]
    Workbook(#[from] XlsxError),
}

impl GeneratorError {
    /// Whether this is the missing-version-directory condition, the one
    /// condition callers recover from (report and skip the version).
    pub fn is_missing_directory(&self) -> bool {
        matches!(self, Self::Loader(LoaderError::DirectoryMissing { .. }))
    }
}

/// Row count for one generated sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
}

/// Outcome of one documentation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub version: String,
    pub output_path: PathBuf,
    pub sheets: Vec<SheetSummary>,
}

impl GenerationReport {
    /// Human-readable per-sheet row count summary.
    pub fn summary_line(&self) -> String {
        let parts: Vec<String> = self
            .sheets
            .iter()
            .map(|s| format!("{} ({} rows)", s.name, s.rows))
            .collect();
        format!("Worksheets: {}", parts.join(", "))
    }
}

/// Generates the reference workbook for one schema version.
#[derive(Debug, Clone)]
pub struct DocGenerator {
    schemas_root: PathBuf,
}

impl DocGenerator {
    /// Create a generator rooted at the schemas directory.
    pub fn new(schemas_root: impl Into<PathBuf>) -> Self {
        Self {
            schemas_root: schemas_root.into(),
        }
    }

    /// The schemas root directory.
    pub fn schemas_root(&self) -> &Path {
        &self.schemas_root
    }

    /// Generate the documentation workbook for `version`.
    ///
    /// Builds the `meta`, `campaign`, and `lineitems` sheets, plus a
    /// `dictionary` sheet when the version carries a dictionary schema
    /// (its absence is expected for older versions and only logged).
    /// The workbook is saved as
    /// `mediaplan_schema_v<VERSION>_documentation.xlsx` inside the
    /// version's schema directory.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Loader` with `DirectoryMissing` when the
    /// version has no schema directory (callers report this and skip the
    /// version), and loader/workbook errors otherwise.
    pub fn generate(&self, version: &str) -> GeneratorResult<GenerationReport> {
        let version_dir = self.schemas_root.join(version);
        if !version_dir.is_dir() {
            return Err(LoaderError::directory_missing(version, version_dir).into());
        }

        let shape = shape_for(version);
        let mut workbook = Workbook::new();
        let mut sheets = Vec::new();

        tracing::info!(version, "Processing meta schema");
        let mediaplan = load_json_file(&version_dir.join("mediaplan.schema.json"))?;
        let meta_rows = extract::extract_meta(&mediaplan);
        Self::add_sheet(&mut workbook, "meta", &meta_rows, &mut sheets)?;

        tracing::info!(version, "Processing campaign schema");
        let campaign = load_json_file(&version_dir.join("campaign.schema.json"))?;
        let campaign_rows = extract::extract_campaign(&campaign, &shape);
        Self::add_sheet(&mut workbook, "campaign", &campaign_rows, &mut sheets)?;

        tracing::info!(version, "Processing lineitem schema");
        let lineitem = load_json_file(&version_dir.join("lineitem.schema.json"))?;
        let lineitem_rows = extract::extract_lineitem(&lineitem, &shape);
        Self::add_sheet(&mut workbook, "lineitems", &lineitem_rows, &mut sheets)?;

        let dictionary_path = version_dir.join("dictionary.schema.json");
        if dictionary_path.exists() {
            tracing::info!(version, "Processing dictionary schema");
            let dictionary = load_json_file(&dictionary_path)?;
            let dictionary_rows = extract::extract_dictionary(&dictionary, &shape);
            Self::add_sheet(&mut workbook, "dictionary", &dictionary_rows, &mut sheets)?;
        } else {
            tracing::info!(version, "Skipping dictionary schema (not present in this version)");
        }

        let output_path =
            version_dir.join(format!("mediaplan_schema_v{version}_documentation.xlsx"));
        workbook.save(&output_path)?;
        tracing::info!(version, output = %output_path.display(), "Schema documentation generated");

        Ok(GenerationReport {
            version: version.to_string(),
            output_path,
            sheets,
        })
    }

    fn add_sheet(
        workbook: &mut Workbook,
        name: &str,
        rows: &[FieldRow],
        sheets: &mut Vec<SheetSummary>,
    ) -> Result<(), XlsxError> {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        write_sheet(worksheet, rows)?;
        sheets.push(SheetSummary {
            name: name.to_string(),
            rows: rows.len(),
        });
        Ok(())
    }
}
