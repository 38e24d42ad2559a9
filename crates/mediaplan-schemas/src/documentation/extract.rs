//! Field extraction: schema `properties` to flat documentation rows
//!
//! Each extraction variant walks one schema's `properties` mapping in
//! insertion order and produces [`FieldRow`]s. Nested structures (array
//! items, open-map values, shared dictionary definitions) are flattened
//! into the same sequence behind a synthetic separator row; nesting
//! deeper than one level is not documented.

use crate::versioning::{dictionary_definition_for_group, RequiredRule, VersionShape};
use serde_json::{Map, Value};

/// One flattened documentation record describing a single schema property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub name: String,
    pub description: String,
    /// "Yes", "No", "Conditional", or empty for separator rows.
    pub required: String,
    pub data_type: String,
    pub enum_values: String,
}

impl FieldRow {
    /// Synthetic row marking the start of a nested structure's fields.
    pub fn separator(section: &str) -> Self {
        Self {
            name: String::new(),
            description: format!("--- {section} structure ---"),
            required: String::new(),
            data_type: String::new(),
            enum_values: String::new(),
        }
    }

    /// Whether this is a structure separator row.
    pub fn is_separator(&self) -> bool {
        self.name.is_empty() && self.description.starts_with("---")
    }
}

/// Derive the documentation data type string for a property definition.
///
/// Arrays render as `array[<item-type>]`, defaulting the item type to
/// `object` when `items` carries no `type`. Strings with a `format`
/// render as `string (<format>)`. Everything else is the raw `type`
/// string, possibly empty.
pub fn data_type(def: &Value) -> String {
    let prop_type = def.get("type").and_then(|t| t.as_str()).unwrap_or("");

    match prop_type {
        "array" => {
            let item_type = def
                .get("items")
                .and_then(|items| items.get("type"))
                .and_then(|t| t.as_str())
                .unwrap_or("object");
            format!("array[{item_type}]")
        }
        "string" => match def.get("format").and_then(|f| f.as_str()) {
            Some(format) => format!("string ({format})"),
            None => "string".to_string(),
        },
        other => other.to_string(),
    }
}

/// Derive the comma-joined enum column for a property definition.
pub fn enum_values(def: &Value) -> String {
    let Some(values) = def.get("enum").and_then(|e| e.as_array()) else {
        return String::new();
    };
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn required_label(name: &str, required: &[String]) -> &'static str {
    if required.iter().any(|r| r == name) {
        "Yes"
    } else {
        "No"
    }
}

fn required_list(schema: &Value) -> Vec<String> {
    schema
        .get("required")
        .and_then(|r| r.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn properties(schema: &Value) -> Option<&Map<String, Value>> {
    schema.get("properties").and_then(|p| p.as_object())
}

/// A property that is only a reference, with nothing to say about it,
/// is not worth a standalone row.
fn is_undocumented_ref(def: &Value) -> bool {
    def.get("$ref").is_some() && def.get("description").is_none()
}

fn description(def: &Value) -> String {
    def.get("description")
        .and_then(|d| d.as_str())
        .unwrap_or("")
        .to_string()
}

fn row_for(name: &str, def: &Value, required: &[String]) -> FieldRow {
    FieldRow {
        name: name.to_string(),
        description: description(def),
        required: required_label(name, required).to_string(),
        data_type: data_type(def),
        enum_values: enum_values(def),
    }
}

/// Extract rows from a schema's top-level `properties`.
///
/// `required_override` replaces the schema's own `required` list; the
/// meta extraction path uses it after descending into the `meta`
/// sub-schema.
pub fn extract_properties(schema: &Value, required_override: Option<&[String]>) -> Vec<FieldRow> {
    let own_required;
    let required = match required_override {
        Some(list) => list,
        None => {
            own_required = required_list(schema);
            own_required.as_slice()
        }
    };

    let Some(props) = properties(schema) else {
        return Vec::new();
    };

    props
        .iter()
        .filter(|(_, def)| !is_undocumented_ref(def))
        .map(|(name, def)| row_for(name, def, required))
        .collect()
}

/// Extract the `meta` sub-schema's rows from the root mediaplan schema.
///
/// Descends one level into the `meta` property's own `properties` and
/// `required` before applying the ordinary row rules.
pub fn extract_meta(mediaplan_schema: &Value) -> Vec<FieldRow> {
    let Some(meta_def) = mediaplan_schema
        .get("properties")
        .and_then(|p| p.get("meta"))
    else {
        return Vec::new();
    };
    let required = required_list(meta_def);
    extract_properties(meta_def, Some(&required))
}

/// Nested structure section: separator row plus the object's own rows.
fn structure_section(name: &str, object_schema: &Value, rule: RequiredRule) -> Vec<FieldRow> {
    let nested_required = required_list(object_schema);
    let mut rows = vec![FieldRow::separator(name)];

    if let Some(props) = properties(object_schema) {
        for (prop_name, prop_def) in props {
            if is_undocumented_ref(prop_def) {
                continue;
            }
            let required = match rule {
                RequiredRule::Binary => required_label(prop_name, &nested_required).to_string(),
                RequiredRule::Ternary => {
                    if nested_required.iter().any(|r| r == prop_name) {
                        "Yes".to_string()
                    } else {
                        "Conditional".to_string()
                    }
                }
                RequiredRule::AlwaysNo => "No".to_string(),
            };
            rows.push(FieldRow {
                name: format!("  {prop_name}"),
                description: description(prop_def),
                required,
                data_type: data_type(prop_def),
                enum_values: enum_values(prop_def),
            });
        }
    }

    rows
}

/// Extract campaign rows, expanding the shape's named array-valued
/// properties whose `items` describe an object into structure sections.
pub fn extract_campaign(schema: &Value, shape: &VersionShape) -> Vec<FieldRow> {
    let mut rows = extract_properties(schema, None);

    for section in shape.campaign_object_arrays {
        let Some(items) = properties(schema)
            .and_then(|props| props.get(*section))
            .and_then(|def| def.get("items"))
        else {
            continue;
        };
        if items.get("properties").is_some() {
            rows.extend(structure_section(section, items, RequiredRule::Binary));
        }
    }

    rows
}

/// Extract line item rows, expanding the shape's named open-map
/// properties' `additionalProperties` object into structure sections.
/// Every nested row's required flag is forced to "No".
pub fn extract_lineitem(schema: &Value, shape: &VersionShape) -> Vec<FieldRow> {
    let mut rows = extract_properties(schema, None);

    for section in shape.lineitem_value_maps {
        let Some(value_schema) = properties(schema)
            .and_then(|props| props.get(*section))
            .and_then(|def| def.get("additionalProperties"))
        else {
            continue;
        };
        if value_schema.is_object() {
            rows.extend(structure_section(
                section,
                value_schema,
                RequiredRule::AlwaysNo,
            ));
        }
    }

    rows
}

/// Extract the dictionary schema's rows.
///
/// Produces one row per named group, one indented row per custom-field
/// slot inside each group (tagged with the slot's bound definition), and
/// a reference section per shape-listed shared definition present in
/// `$defs`. Absent definitions contribute nothing.
pub fn extract_dictionary(schema: &Value, shape: &VersionShape) -> Vec<FieldRow> {
    let mut rows = Vec::new();

    if let Some(groups) = properties(schema) {
        for (group_name, group_def) in groups {
            if is_undocumented_ref(group_def) {
                continue;
            }
            rows.push(FieldRow {
                name: group_name.clone(),
                description: description(group_def),
                required: "No".to_string(),
                data_type: "object".to_string(),
                enum_values: String::new(),
            });

            let Some(slots) = properties(group_def) else {
                continue;
            };
            let definition = dictionary_definition_for_group(group_name);
            let slot_type = if definition == "object" {
                "object".to_string()
            } else {
                format!("object ({definition})")
            };
            for slot_name in slots.keys() {
                rows.push(FieldRow {
                    name: format!("  {slot_name}"),
                    description: format!("Configuration for {slot_name}"),
                    required: "No".to_string(),
                    data_type: slot_type.clone(),
                    enum_values: String::new(),
                });
            }
        }
    }

    let defs = schema.get("$defs");
    for (def_name, rule) in shape.dictionary_defs {
        let Some(def_schema) = defs.and_then(|d| d.get(*def_name)) else {
            continue;
        };
        rows.extend(structure_section(def_name, def_schema, *rule));
    }

    rows
}
