//! Validate command handler

use crate::cli::{OutputFormat, ValidateArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use mediaplan_schemas::ConformanceChecker;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Handle the validate command
///
/// With an explicit example path, validates that single file. Otherwise
/// runs the whole suite: every example in the examples directory, the
/// schema shape of every allowed version, and the existence of every
/// version directory referenced by an example. Each check is scoped to
/// its own file or version; failures are collected, not short-circuited.
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let schemas_dir: PathBuf = args
        .schemas_dir
        .unwrap_or_else(|| config.paths.schemas_dir.clone());
    let checker = ConformanceChecker::open(&schemas_dir)?;

    if let Some(example) = args.example {
        if !example.exists() {
            return Err(Error::FileNotFound { path: example });
        }
        return match checker.check_example_file(&example) {
            Ok(version) => {
                output.success(&format!(
                    "{} conforms to schema version {version}",
                    example.display()
                ))?;
                if output.format() != OutputFormat::Human {
                    output.data(&json!({"file": example, "version": version, "valid": true}))?;
                }
                Ok(())
            }
            Err(e) => {
                output.error(&e.to_string())?;
                Err(e.into())
            }
        };
    }

    let examples_dir: PathBuf = args
        .examples_dir
        .unwrap_or_else(|| config.paths.examples_dir.clone());

    info!(schemas = %schemas_dir.display(), examples = %examples_dir.display(), "Running conformance suite");

    let mut total = 0usize;
    let mut failures = 0usize;
    let mut results = Vec::new();

    output.section("Examples")?;
    for outcome in checker.check_examples_dir(&examples_dir)? {
        total += 1;
        match &outcome.result {
            Ok(version) => {
                output.success(&format!(
                    "{} (schema {version})",
                    outcome.path.display()
                ))?;
                results.push(json!({"check": "example", "file": outcome.path, "ok": true}));
            }
            Err(e) => {
                failures += 1;
                output.error(&e.to_string())?;
                results.push(json!({
                    "check": "example",
                    "file": outcome.path,
                    "ok": false,
                    "error": e.to_string(),
                }));
            }
        }
    }

    output.section("Version shapes")?;
    for (version, result) in checker.check_allowed_version_shapes() {
        total += 1;
        match result {
            Ok(()) => {
                output.success(&format!("version {version}"))?;
                results.push(json!({"check": "shape", "version": version, "ok": true}));
            }
            Err(e) => {
                failures += 1;
                output.error(&e.to_string())?;
                results.push(json!({
                    "check": "shape",
                    "version": version,
                    "ok": false,
                    "error": e.to_string(),
                }));
            }
        }
    }

    output.section("Referenced versions")?;
    for (path, result) in checker.check_referenced_versions(&examples_dir)? {
        total += 1;
        match result {
            Ok(()) => {
                output.success(&format!("{}", path.display()))?;
                results.push(json!({"check": "referenced", "file": path, "ok": true}));
            }
            Err(e) => {
                failures += 1;
                output.error(&e.to_string())?;
                results.push(json!({
                    "check": "referenced",
                    "file": path,
                    "ok": false,
                    "error": e.to_string(),
                }));
            }
        }
    }

    if output.format() != OutputFormat::Human {
        output.data(&json!({
            "total": total,
            "failures": failures,
            "results": results,
        }))?;
    }

    if failures > 0 {
        Err(Error::ChecksFailed { failures, total })
    } else {
        output.section("Summary")?;
        output.success(&format!("{total} checks passed"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;

    fn sink() -> OutputWriter {
        struct Sink;
        impl io::Write for Sink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(Sink))
    }

    fn fixture() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let schemas = root.path().join("schemas");
        std::fs::create_dir(&schemas).unwrap();
        std::fs::write(
            schemas.join("schema_versions.json"),
            serde_json::to_string(&json!({"current": "1.0", "supported": ["1.0"]})).unwrap(),
        )
        .unwrap();

        let v1 = schemas.join("1.0");
        std::fs::create_dir(&v1).unwrap();
        let mediaplan = json!({
            "type": "object",
            "properties": {
                "meta": {
                    "type": "object",
                    "properties": {
                        "schema_version": {"type": "string"},
                        "name": {"type": "string"}
                    },
                    "required": ["schema_version", "name"]
                }
            },
            "required": ["meta"]
        });
        let flat = json!({"type": "object", "properties": {"id": {"type": "string"}}});
        for (name, schema) in [
            ("mediaplan.schema.json", &mediaplan),
            ("campaign.schema.json", &flat),
            ("lineitem.schema.json", &flat),
        ] {
            std::fs::write(v1.join(name), serde_json::to_string(schema).unwrap()).unwrap();
        }

        let examples = root.path().join("examples");
        std::fs::create_dir(&examples).unwrap();
        std::fs::write(
            examples.join("plan.json"),
            serde_json::to_string(&json!({
                "meta": {"schema_version": "1.0", "name": "test plan"}
            }))
            .unwrap(),
        )
        .unwrap();

        root
    }

    #[test]
    fn test_single_example_passes() {
        let root = fixture();
        let args = ValidateArgs {
            example: Some(root.path().join("examples/plan.json")),
            schemas_dir: Some(root.path().join("schemas")),
            examples_dir: None,
        };
        handle_validate(args, &Config::default(), &mut sink()).unwrap();
    }

    #[test]
    fn test_suite_run_passes_on_fixture() {
        let root = fixture();
        let args = ValidateArgs {
            example: None,
            schemas_dir: Some(root.path().join("schemas")),
            examples_dir: Some(root.path().join("examples")),
        };
        handle_validate(args, &Config::default(), &mut sink()).unwrap();
    }

    #[test]
    fn test_suite_run_counts_failures() {
        let root = fixture();
        // An example that violates the meta required list.
        std::fs::write(
            root.path().join("examples/broken.json"),
            serde_json::to_string(&json!({"meta": {"schema_version": "1.0"}})).unwrap(),
        )
        .unwrap();

        let args = ValidateArgs {
            example: None,
            schemas_dir: Some(root.path().join("schemas")),
            examples_dir: Some(root.path().join("examples")),
        };
        let err = handle_validate(args, &Config::default(), &mut sink()).unwrap_err();
        match err {
            Error::ChecksFailed { failures, total } => {
                assert_eq!(failures, 1);
                // 2 examples + 1 shape + 2 referenced-version checks.
                assert_eq!(total, 5);
            }
            other => panic!("Expected ChecksFailed, got: {other}"),
        }
    }

    #[test]
    fn test_missing_example_file() {
        let root = fixture();
        let args = ValidateArgs {
            example: Some(root.path().join("examples/absent.json")),
            schemas_dir: Some(root.path().join("schemas")),
            examples_dir: None,
        };
        let err = handle_validate(args, &Config::default(), &mut sink()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
