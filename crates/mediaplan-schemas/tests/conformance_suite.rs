//! Integration tests for the conformance checker
//!
//! These mirror how the suite runs against the real repository layout:
//! a registry, versioned schema directories with cross-file `$ref`s,
//! and example documents on disk.

mod common;

use common::{fixture_tree, valid_example, write_json};
use mediaplan_schemas::{ConformanceChecker, ConformanceError, LoaderError};
use serde_json::json;
use std::fs;

#[test]
fn valid_example_passes_with_cross_file_refs() {
    let root = fixture_tree();
    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();

    let version = checker
        .check_example_file(&root.path().join("examples/brand_plan.json"))
        .unwrap();
    assert_eq!(version, "2.0");
}

#[test]
fn missing_required_top_level_field_fails_naming_it() {
    let root = fixture_tree();
    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();

    let mut example = valid_example("2.0");
    example.as_object_mut().unwrap().remove("lineitems");
    let path = root.path().join("examples/no_lineitems.json");
    write_json(&path, &example);

    let err = checker.check_example_file(&path).unwrap_err();
    match err {
        ConformanceError::ValidationFailed { violations, .. } => {
            assert!(!violations.is_empty());
            assert!(
                violations.to_string().contains("lineitems"),
                "diagnostic should name the missing field, got: {violations}"
            );
        }
        other => panic!("Expected ValidationFailed, got: {other}"),
    }
}

#[test]
fn nested_required_violation_surfaces_instance_path() {
    let root = fixture_tree();
    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();

    let mut example = valid_example("2.0");
    // Campaign budget is required by the referenced campaign schema.
    example["campaigns"][0]
        .as_object_mut()
        .unwrap()
        .remove("budget");
    let path = root.path().join("examples/no_budget.json");
    write_json(&path, &example);

    let err = checker.check_example_file(&path).unwrap_err();
    match err {
        ConformanceError::ValidationFailed { violations, .. } => {
            assert!(
                violations.to_string().contains("budget"),
                "cross-file $ref constraint should surface, got: {violations}"
            );
        }
        other => panic!("Expected ValidationFailed, got: {other}"),
    }
}

#[test]
fn wrong_type_fails_validation() {
    let root = fixture_tree();
    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();

    let mut example = valid_example("2.0");
    example["campaigns"][0]["budget"] = json!("a quarter million");
    let path = root.path().join("examples/string_budget.json");
    write_json(&path, &example);

    let err = checker.check_example_file(&path).unwrap_err();
    assert!(matches!(err, ConformanceError::ValidationFailed { .. }));
}

#[test]
fn example_without_version_declaration_fails() {
    let root = fixture_tree();
    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();

    let path = root.path().join("examples/undeclared.json");
    write_json(&path, &json!({"meta": {"name": "no version"}}));

    let err = checker.check_example_file(&path).unwrap_err();
    assert!(matches!(
        err,
        ConformanceError::MissingVersionDeclaration { .. }
    ));
    assert!(err.to_string().contains("undeclared.json"));
}

#[test]
fn deprecated_version_rejected_even_though_schemas_exist() {
    let root = fixture_tree();
    let schemas_dir = root.path().join("schemas");
    // Give 0.0 a directory on disk; the registry still classifies it
    // deprecated, so the allowlist check must fail regardless.
    let v0 = schemas_dir.join("0.0");
    fs::create_dir(&v0).unwrap();
    write_json(&v0.join("mediaplan.schema.json"), &common::mediaplan_schema());

    let checker = ConformanceChecker::open(&schemas_dir).unwrap();
    let path = root.path().join("examples/legacy.json");
    write_json(&path, &valid_example("0.0"));

    let err = checker.check_example_file(&path).unwrap_err();
    match err {
        ConformanceError::UnsupportedVersion { version, allowed, .. } => {
            assert_eq!(version, "0.0");
            assert_eq!(allowed, "1.0, 2.0, 3.0");
        }
        other => panic!("Expected UnsupportedVersion, got: {other}"),
    }
}

#[test]
fn allowed_version_without_directory_is_loader_failure() {
    let root = fixture_tree();
    let schemas_dir = root.path().join("schemas");
    fs::remove_dir_all(schemas_dir.join("3.0")).unwrap();

    let checker = ConformanceChecker::open(&schemas_dir).unwrap();
    let path = root.path().join("examples/preview.json");
    write_json(&path, &valid_example("3.0"));

    let err = checker.check_example_file(&path).unwrap_err();
    assert!(matches!(
        err,
        ConformanceError::Loader(LoaderError::DirectoryMissing { .. })
    ));
}

#[test]
fn version_shape_checks_per_era() {
    let root = fixture_tree();
    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();

    for version in ["1.0", "2.0", "3.0"] {
        checker
            .check_version_shape(version)
            .unwrap_or_else(|e| panic!("shape check failed for {version}: {e}"));
    }
}

#[test]
fn late_version_missing_dictionary_fails_shape_check() {
    let root = fixture_tree();
    let schemas_dir = root.path().join("schemas");
    fs::remove_file(schemas_dir.join("3.0/dictionary.schema.json")).unwrap();

    let checker = ConformanceChecker::open(&schemas_dir).unwrap();
    let err = checker.check_version_shape("3.0").unwrap_err();
    match err {
        ConformanceError::MissingRequiredSchemaFile { version, filename } => {
            assert_eq!(version, "3.0");
            assert_eq!(filename, "dictionary.schema.json");
        }
        other => panic!("Expected MissingRequiredSchemaFile, got: {other}"),
    }
}

#[test]
fn early_version_missing_campaign_schema_fails_shape_check() {
    let root = fixture_tree();
    let schemas_dir = root.path().join("schemas");
    fs::remove_file(schemas_dir.join("1.0/campaign.schema.json")).unwrap();

    let checker = ConformanceChecker::open(&schemas_dir).unwrap();
    let err = checker.check_version_shape("1.0").unwrap_err();
    assert!(matches!(
        err,
        ConformanceError::MissingRequiredSchemaFile { .. }
    ));
}

#[test]
fn one_bad_example_does_not_stop_the_others() {
    let root = fixture_tree();
    let examples_dir = root.path().join("examples");
    write_json(&examples_dir.join("bad.json"), &json!({"meta": {}}));

    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();
    let outcomes = checker.check_examples_dir(&examples_dir).unwrap();

    assert_eq!(outcomes.len(), 2);
    let bad = outcomes
        .iter()
        .find(|o| o.path.ends_with("bad.json"))
        .unwrap();
    assert!(bad.result.is_err());
    let good = outcomes
        .iter()
        .find(|o| o.path.ends_with("brand_plan.json"))
        .unwrap();
    assert!(good.result.is_ok());
}

#[test]
fn referenced_versions_need_directories() {
    let root = fixture_tree();
    let examples_dir = root.path().join("examples");
    // Allowed by the registry (preview), directory removed from disk.
    write_json(&examples_dir.join("preview.json"), &valid_example("3.0"));
    fs::remove_dir_all(root.path().join("schemas/3.0")).unwrap();

    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();
    let outcomes = checker.check_referenced_versions(&examples_dir).unwrap();

    let preview = outcomes
        .iter()
        .find(|(path, _)| path.ends_with("preview.json"))
        .unwrap();
    assert!(matches!(
        preview.1,
        Err(ConformanceError::ReferencedVersionMissing { .. })
    ));
    let brand = outcomes
        .iter()
        .find(|(path, _)| path.ends_with("brand_plan.json"))
        .unwrap();
    assert!(brand.1.is_ok());
}

#[test]
fn allowed_version_shapes_report_per_version() {
    let root = fixture_tree();
    let checker = ConformanceChecker::open(root.path().join("schemas")).unwrap();

    let outcomes = checker.check_allowed_version_shapes();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|(_, result)| result.is_ok()));
}
