//! Versions command handler

use crate::cli::{OutputFormat, VersionsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use mediaplan_schemas::SchemaRegistry;
use serde_json::json;
use std::path::PathBuf;

/// Handle the versions command: show the registry classification and
/// which version directories exist on disk.
pub fn handle_versions(
    args: VersionsArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let schemas_dir: PathBuf = args
        .schemas_dir
        .unwrap_or_else(|| config.paths.schemas_dir.clone());
    let registry = SchemaRegistry::load(&schemas_dir)?;

    if output.format() != OutputFormat::Human {
        let on_disk: Vec<String> = registry
            .known_versions()
            .into_iter()
            .filter(|v| schemas_dir.join(v).is_dir())
            .collect();
        return output.data(&json!({
            "current": registry.current,
            "supported": registry.supported,
            "deprecated": registry.deprecated,
            "preview": registry.preview,
            "on_disk": on_disk,
        }));
    }

    if let Some(current) = &registry.current {
        output.info(&format!("current:    {current}"))?;
    }
    for (label, versions) in [
        ("supported", &registry.supported),
        ("deprecated", &registry.deprecated),
        ("preview", &registry.preview),
    ] {
        if versions.is_empty() {
            continue;
        }
        let annotated: Vec<String> = versions
            .iter()
            .map(|v| {
                if schemas_dir.join(v).is_dir() {
                    v.clone()
                } else {
                    format!("{v} (no directory)")
                }
            })
            .collect();
        output.info(&format!("{label}: {}", annotated.join(", ")))?;
    }

    Ok(())
}
