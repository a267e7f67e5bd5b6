//! Index mapping generation for catalog tables
//!
//! This module provides functionality to:
//! - Map native MySQL column types to index field types
//! - Resolve per-table override rules (index name, shards, replicas,
//!   searchable columns, explicit column settings)
//! - Filter catalog tables through a dot-delimited glob allow-list
//! - Assemble one complete mapping document per table
//!
//! # Example
//!
//! ```rust,ignore
//! use es_mapping_helper::mapping::{GeneratorConfig, MappingGenerator, TableFilter};
//!
//! let config = GeneratorConfig::load("config.yml")?;
//! let filter = TableFilter::compile(&config.tables)?;
//! let generator = MappingGenerator::new(config.index, config.rules);
//!
//! let generated = generator.generate_all(&catalog, &filter, None).await?;
//! for item in &generated {
//!     println!("PUT /{}\n{}", item.target_index, item.document.to_json_pretty()?);
//! }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod planner;
pub mod resolver;
pub mod typemap;
pub mod types;

pub use config::{ColumnSetting, DatabaseConfig, GeneratorConfig, IndexDefaults, Rule};
pub use error::{MappingError, MappingResult};
pub use filter::TableFilter;
pub use generator::{GeneratedMapping, MappingGenerator};
pub use planner::plan_index;
pub use resolver::{find_rule, resolve_column};
pub use typemap::FieldType;
pub use types::{DbColumn, FieldMapping, IndexPlan, MappingDocument};

/// Generate mapping documents for every eligible table of a catalog.
///
/// This is a convenience function combining filter compilation and the
/// generator run for callers that already hold a parsed configuration.
pub async fn generate_mappings(
    config: &GeneratorConfig,
    catalog: &dyn crate::catalog::Catalog,
    suffix: Option<&str>,
) -> MappingResult<Vec<GeneratedMapping>> {
    let filter = TableFilter::compile(&config.tables)?;
    let generator = MappingGenerator::new(config.index.clone(), config.rules.clone());
    generator.generate_all(catalog, &filter, suffix).await
}
