//! es-mapping-helper - Elasticsearch mapping generation from MySQL schemas
//!
//! Provides:
//! - Native column type to index field type mapping
//! - Per-table override rules (index name, shards, replicas, searchable
//!   columns, explicit column settings)
//! - Table selection through a dot-delimited glob allow-list
//! - Catalog access against a MySQL `information_schema`
//! - A CLI that prints one `PUT` block per eligible table

pub mod catalog;
pub mod cli;
pub mod mapping;

// Re-export commonly used types
pub use catalog::{Catalog, MySqlCatalog};
pub use mapping::{
    ColumnSetting, DbColumn, FieldMapping, FieldType, GeneratedMapping, GeneratorConfig,
    IndexDefaults, MappingDocument, MappingError, MappingGenerator, MappingResult, Rule,
    TableFilter,
};
