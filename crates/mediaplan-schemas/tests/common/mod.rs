//! Shared fixture tree for integration tests
//!
//! Builds a realistic schemas root on disk: a version registry, a full
//! version "2.0" schema set with cross-file `$ref`s, a late-shape
//! version "3.0", and an early version "1.0" without a dictionary.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

pub fn mediaplan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "meta": {
                "type": "object",
                "description": "Plan-level metadata",
                "properties": {
                    "schema_version": {
                        "type": "string",
                        "description": "Schema version this document conforms to"
                    },
                    "name": {"type": "string", "description": "Media plan name"},
                    "created": {"type": "string", "format": "date"},
                    "currency": {"type": "string", "enum": ["USD", "EUR", "GBP"]}
                },
                "required": ["schema_version", "name"]
            },
            "campaigns": {
                "type": "array",
                "description": "Campaigns in this plan",
                "items": {"$ref": "campaign.schema.json"}
            },
            "lineitems": {
                "type": "array",
                "description": "Line items across all campaigns",
                "items": {"$ref": "lineitem.schema.json"}
            },
            "dictionary": {"$ref": "dictionary.schema.json"}
        },
        "required": ["meta", "campaigns", "lineitems"]
    })
}

pub fn campaign_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "string", "description": "Campaign identifier"},
            "name": {"type": "string", "description": "Campaign name"},
            "budget": {"type": "number", "description": "Total budget"},
            "start_date": {"type": "string", "format": "date"},
            "end_date": {"type": "string", "format": "date"},
            "objective": {
                "type": "string",
                "enum": ["awareness", "consideration", "conversion"]
            },
            "target_audiences": {
                "type": "array",
                "description": "Audience definitions for this campaign",
                "items": {
                    "type": "object",
                    "properties": {
                        "audience_name": {"type": "string"},
                        "demographic": {"type": "string"},
                        "notes": {"type": "string"}
                    },
                    "required": ["audience_name"]
                }
            }
        },
        "required": ["id", "name", "budget"]
    })
}

pub fn lineitem_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "string", "description": "Line item identifier"},
            "campaign_id": {"type": "string", "description": "Owning campaign"},
            "channel": {
                "type": "string",
                "enum": ["display", "video", "social", "search", "audio"]
            },
            "cost_per_unit": {"type": "number"},
            "metric_formulas": {
                "type": "object",
                "description": "Named metric formulas for this line item",
                "additionalProperties": {
                    "type": "object",
                    "properties": {
                        "formula": {"type": "string"},
                        "precision": {"type": "number"}
                    },
                    "required": ["formula"]
                }
            }
        },
        "required": ["id", "campaign_id"]
    })
}

pub fn dictionary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "lineitem_custom_dimensions": {
                "type": "object",
                "description": "Custom dimension slots for line items",
                "properties": {
                    "dim_custom1": {"$ref": "#/$defs/custom_field_config"},
                    "dim_custom2": {"$ref": "#/$defs/custom_field_config"}
                }
            },
            "standard_metrics": {
                "type": "object",
                "description": "Standard metric formula bindings",
                "properties": {
                    "impressions": {"$ref": "#/$defs/metric_formula_config"},
                    "clicks": {"$ref": "#/$defs/metric_formula_config"}
                }
            }
        },
        "$defs": {
            "custom_field_config": {
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "description": "Whether the slot is in use",
                        "enum": ["enabled", "disabled"]
                    },
                    "field_name": {"type": "string", "description": "Display name"},
                    "field_type": {"type": "string"},
                    "options": {"type": "array", "items": {"type": "string"}}
                },
                "required": ["status"]
            },
            "metric_formula_config": {
                "type": "object",
                "properties": {
                    "formula": {"type": "string", "description": "Calculation formula"},
                    "description": {"type": "string"}
                },
                "required": ["formula"]
            },
            "custom_metric_config": {
                "type": "object",
                "properties": {
                    "status": {"type": "string", "enum": ["enabled", "disabled"]},
                    "metric_name": {"type": "string"}
                },
                "required": ["status"]
            }
        }
    })
}

pub fn registry() -> Value {
    json!({
        "current": "2.0",
        "supported": ["1.0", "2.0"],
        "deprecated": ["0.0"],
        "preview": ["3.0"]
    })
}

pub fn valid_example(version: &str) -> Value {
    json!({
        "meta": {
            "schema_version": version,
            "name": "Q3 brand plan",
            "created": "2024-07-01",
            "currency": "USD"
        },
        "campaigns": [
            {
                "id": "c-001",
                "name": "Brand awareness",
                "budget": 250000.0,
                "objective": "awareness",
                "target_audiences": [
                    {"audience_name": "adults-25-54", "demographic": "25-54"}
                ]
            }
        ],
        "lineitems": [
            {
                "id": "li-001",
                "campaign_id": "c-001",
                "channel": "display",
                "cost_per_unit": 4.25
            }
        ]
    })
}

/// Build the full fixture tree and return (root, schemas_dir, examples_dir).
pub fn fixture_tree() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let schemas = root.path().join("schemas");
    fs::create_dir(&schemas).unwrap();
    write_json(&schemas.join("schema_versions.json"), &registry());

    // Version 1.0: split schemas, no dictionary.
    let v1 = schemas.join("1.0");
    fs::create_dir(&v1).unwrap();
    write_json(&v1.join("mediaplan.schema.json"), &mediaplan_v1_schema());
    write_json(&v1.join("campaign.schema.json"), &campaign_schema());
    write_json(&v1.join("lineitem.schema.json"), &lineitem_schema());

    // Versions 2.0 and 3.0: full set with dictionary.
    for version in ["2.0", "3.0"] {
        let dir = schemas.join(version);
        fs::create_dir(&dir).unwrap();
        write_json(&dir.join("mediaplan.schema.json"), &mediaplan_schema());
        write_json(&dir.join("campaign.schema.json"), &campaign_schema());
        write_json(&dir.join("lineitem.schema.json"), &lineitem_schema());
        write_json(&dir.join("dictionary.schema.json"), &dictionary_schema());
    }

    let examples = root.path().join("examples");
    fs::create_dir(&examples).unwrap();
    write_json(&examples.join("brand_plan.json"), &valid_example("2.0"));

    root
}

fn mediaplan_v1_schema() -> Value {
    let mut schema = mediaplan_schema();
    // 1.0 predates the dictionary.
    schema
        .get_mut("properties")
        .and_then(|p| p.as_object_mut())
        .map(|p| p.remove("dictionary"));
    schema
}
