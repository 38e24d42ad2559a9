//! Document command handler

use crate::cli::{DocumentArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use mediaplan_schemas::{DocGenerator, SchemaRegistry};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

/// Handle the document command
///
/// Generates one workbook per requested version. A version without a
/// schema directory is reported and skipped; the run continues with the
/// remaining versions.
pub fn handle_document(
    args: DocumentArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let schemas_dir: PathBuf = args
        .schemas_dir
        .unwrap_or_else(|| config.paths.schemas_dir.clone());

    let versions = if args.all {
        SchemaRegistry::load(&schemas_dir)?.known_versions()
    } else if args.versions.is_empty() {
        return Err(Error::invalid_args(
            "specify at least one schema version, or use --all",
        ));
    } else {
        args.versions
    };

    let generator = DocGenerator::new(&schemas_dir);
    let mut reports = Vec::new();
    let mut skipped = Vec::new();

    for version in &versions {
        info!(version, "Generating documentation");
        output.info(&format!(
            "Generating documentation for schema version {version}"
        ))?;

        match generator.generate(version) {
            Ok(report) => {
                output.success(&format!(
                    "Schema documentation generated: {}",
                    report.output_path.display()
                ))?;
                output.info(&report.summary_line())?;
                reports.push(report);
            }
            Err(e) if e.is_missing_directory() => {
                // The one recovered condition: report and move on.
                warn!(version, "Schema directory not found");
                output.error(&format!(
                    "Schema directory not found: {}",
                    schemas_dir.join(version).display()
                ))?;
                skipped.push(version.clone());
            }
            Err(e) => return Err(e.into()),
        }
    }

    if output.format() != OutputFormat::Human {
        let rendered: Vec<_> = reports
            .iter()
            .map(|r| {
                json!({
                    "version": r.version,
                    "output": r.output_path,
                    "sheets": r.sheets.iter()
                        .map(|s| json!({"name": s.name, "rows": s.rows}))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        output.data(&json!({"generated": rendered, "skipped": skipped}))?;
    }

    Ok(())
}
