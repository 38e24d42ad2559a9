//! Declarative per-version schema shape descriptions
//!
//! The schema family changed shape across versions: early versions split
//! campaign and line item schemas into required standalone files, later
//! versions added the custom-field dictionary, and the latest grew
//! nested structures inside the campaign and line item schemas. Rather
//! than one extractor per era, the differences are captured here as
//! data and a single extractor is parameterized by them.

/// How a nested structure section resolves its `required` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRule {
    /// "Yes" when listed in the definition's own `required`, else "No".
    Binary,
    /// "Yes" when listed, else "Conditional". Used for custom field and
    /// custom metric configs, where unlisted fields are needed
    /// depending on the declared field type.
    Ternary,
    /// Every row is "No" regardless of any `required` list.
    AlwaysNo,
}

/// Which schema files and nested structures a version carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionShape {
    /// Schema files that must exist in the version's directory.
    pub required_files: &'static [&'static str],
    /// Campaign properties that are arrays of named objects, each
    /// documented as its own structure section.
    pub campaign_object_arrays: &'static [&'static str],
    /// Line item properties that are open maps, whose
    /// `additionalProperties` object is documented as a structure
    /// section with every row forced to "No".
    pub lineitem_value_maps: &'static [&'static str],
    /// Shared `$defs` in the dictionary schema documented as reference
    /// sections, in order, with their required-column rule.
    pub dictionary_defs: &'static [(&'static str, RequiredRule)],
}

const EARLY_SHAPE: VersionShape = VersionShape {
    required_files: &[
        "mediaplan.schema.json",
        "campaign.schema.json",
        "lineitem.schema.json",
    ],
    campaign_object_arrays: &[],
    lineitem_value_maps: &[],
    dictionary_defs: &[],
};

const V2_SHAPE: VersionShape = VersionShape {
    required_files: &["mediaplan.schema.json", "dictionary.schema.json"],
    campaign_object_arrays: &[],
    lineitem_value_maps: &[],
    dictionary_defs: &[("custom_field_config", RequiredRule::Ternary)],
};

const V3_SHAPE: VersionShape = VersionShape {
    required_files: &["mediaplan.schema.json", "dictionary.schema.json"],
    campaign_object_arrays: &["target_audiences"],
    lineitem_value_maps: &["metric_formulas"],
    dictionary_defs: &[
        ("custom_field_config", RequiredRule::Ternary),
        ("metric_formula_config", RequiredRule::AlwaysNo),
        ("custom_metric_config", RequiredRule::Ternary),
    ],
};

/// Shape for versions the tables don't know about: root schema only.
const DEFAULT_SHAPE: VersionShape = VersionShape {
    required_files: &["mediaplan.schema.json"],
    campaign_object_arrays: &[],
    lineitem_value_maps: &[],
    dictionary_defs: &[],
};

/// Look up the shape for a schema version.
pub fn shape_for(version: &str) -> VersionShape {
    match version {
        "0.0" | "1.0" => EARLY_SHAPE,
        "2.0" => V2_SHAPE,
        "3.0" => V3_SHAPE,
        _ => DEFAULT_SHAPE,
    }
}

/// Dictionary group name to bound definition tag. Adding a group is a
/// one-line table edit.
const GROUP_DEFINITIONS: &[(&str, &str)] = &[
    ("meta_custom_dimensions", "custom_field_config"),
    ("campaign_custom_dimensions", "custom_field_config"),
    ("lineitem_custom_dimensions", "custom_field_config"),
    ("custom_costs", "custom_field_config"),
    ("standard_metrics", "metric_formula_config"),
    ("custom_metrics", "custom_metric_config"),
];

/// The definition tag a dictionary group's slots reference, falling back
/// to a plain `object` for unknown groups.
pub fn dictionary_definition_for_group(group: &str) -> &'static str {
    GROUP_DEFINITIONS
        .iter()
        .find(|(name, _)| *name == group)
        .map(|(_, def)| *def)
        .unwrap_or("object")
}
