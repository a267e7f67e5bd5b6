//! Types for generated mapping documents

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::MappingResult;
use super::typemap::FieldType;

/// A column as reported by the schema catalog.
///
/// Name and native type are lowercased at the catalog boundary before they
/// reach any of the resolution logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbColumn {
    /// Lowercased column name
    pub name: String,
    /// Lowercased native type name (e.g. `varchar`, `bigint`)
    pub native_type: String,
}

impl DbColumn {
    /// Create a column record, lowercasing both fields
    pub fn new(name: impl Into<String>, native_type: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            native_type: native_type.into().to_lowercase(),
        }
    }
}

/// The per-column descriptor written into a mapping document.
///
/// Analyzer fields are omitted from serialized output when absent; they are
/// never emitted as `null` or as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Index field type, carried verbatim from its source
    #[serde(rename = "type")]
    pub field_type: String,
    /// Index-time analyzer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    /// Query-time analyzer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_analyzer: Option<String>,
}

impl FieldMapping {
    /// A mapping with only a field type and no analyzers
    pub fn of_type(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            analyzer: None,
            search_analyzer: None,
        }
    }

    /// A mapping derived from the default native-type translation
    pub fn from_field_type(field_type: FieldType) -> Self {
        Self::of_type(field_type.as_str())
    }

    /// Attach an index-time analyzer
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Attach a query-time analyzer
    pub fn with_search_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.search_analyzer = Some(analyzer.into());
        self
    }
}

/// Final index placement for one table: logical name plus shard and replica
/// counts after rule overrides are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPlan {
    /// Logical index name used as the mapping key
    pub name: String,
    /// Number of primary shards
    pub shards: u32,
    /// Number of replicas
    pub replicas: u32,
}

/// The `settings.index` block of a mapping document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    pub number_of_shards: u32,
    pub number_of_replicas: u32,
}

/// The `settings` block of a mapping document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub index: IndexSettings,
}

/// The per-index properties map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingProperties {
    /// Column name to field mapping
    pub properties: BTreeMap<String, FieldMapping>,
}

/// One complete mapping document for a table.
///
/// `mappings` holds a single entry keyed by the logical index name from the
/// table's `IndexPlan`. `BTreeMap` keeps serialized output deterministic for
/// identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDocument {
    pub settings: Settings,
    pub mappings: BTreeMap<String, MappingProperties>,
}

impl MappingDocument {
    /// Assemble a document from an index plan and resolved column mappings
    pub fn new(plan: IndexPlan, properties: BTreeMap<String, FieldMapping>) -> Self {
        let mut mappings = BTreeMap::new();
        mappings.insert(plan.name, MappingProperties { properties });
        Self {
            settings: Settings {
                index: IndexSettings {
                    number_of_shards: plan.shards,
                    number_of_replicas: plan.replicas,
                },
            },
            mappings,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> MappingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> MappingDocument {
        let mut properties = BTreeMap::new();
        properties.insert(
            "name".to_string(),
            FieldMapping::of_type("text")
                .with_analyzer("ik_max_word")
                .with_search_analyzer("ik_max_word"),
        );
        properties.insert("created_at".to_string(), FieldMapping::of_type("date"));
        MappingDocument::new(
            IndexPlan {
                name: "member".to_string(),
                shards: 5,
                replicas: 1,
            },
            properties,
        )
    }

    #[test]
    fn test_db_column_lowercases() {
        let col = DbColumn::new("CreatedAt", "DATETIME");
        assert_eq!(col.name, "createdat");
        assert_eq!(col.native_type, "datetime");
    }

    #[test]
    fn test_document_shape() {
        let doc = sample_document();
        assert_eq!(doc.settings.index.number_of_shards, 5);
        assert_eq!(doc.settings.index.number_of_replicas, 1);
        assert_eq!(doc.mappings.len(), 1);
        assert_eq!(doc.mappings["member"].properties.len(), 2);
    }

    #[test]
    fn test_absent_analyzers_are_omitted() {
        let json = sample_document().to_json_pretty().unwrap();
        assert!(json.contains("\"number_of_shards\": 5"));
        assert!(json.contains("\"search_analyzer\": \"ik_max_word\""));
        // created_at has no analyzers, so the keys must not appear with
        // null or empty values anywhere in the output
        assert!(!json.contains("null"));
        assert!(!json.contains("\"analyzer\": \"\""));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = sample_document();
        let json = doc.to_json_pretty().unwrap();
        let parsed: MappingDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
