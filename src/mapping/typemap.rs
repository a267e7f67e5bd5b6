//! Native column type to index field type mapping

use serde::{Deserialize, Serialize};

/// Canonical index field types produced by the default type mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Full-text field
    Text,
    /// 64-bit integer
    Long,
    /// 32-bit (or narrower) integer
    Integer,
    /// Floating point or fixed decimal
    Double,
    /// Date or time value
    Date,
    /// Opaque binary payload
    Binary,
}

impl FieldType {
    /// Map a lowercased native MySQL type name to an index field type.
    ///
    /// Total function: anything unrecognized indexes as `text` rather than
    /// failing, so a catalog with exotic column types still generates a
    /// complete document.
    pub fn from_native(native: &str) -> Self {
        match native {
            "varchar" | "char" | "tinytext" | "text" | "mediumtext" | "longtext" | "enum"
            | "set" => FieldType::Text,
            "bigint" => FieldType::Long,
            "int" | "tinyint" | "smallint" | "mediumint" | "bit" => FieldType::Integer,
            "float" | "double" | "decimal" => FieldType::Double,
            "date" | "datetime" | "timestamp" | "time" => FieldType::Date,
            "blob" | "binary" | "longblob" => FieldType::Binary,
            _ => FieldType::Text,
        }
    }

    /// The field type name as written into mapping documents
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Long => "long",
            FieldType::Integer => "integer",
            FieldType::Double => "double",
            FieldType::Date => "date",
            FieldType::Binary => "binary",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
