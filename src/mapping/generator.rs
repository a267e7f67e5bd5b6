//! Mapping document generation
//!
//! Assembles one complete mapping document per eligible table: the rule is
//! resolved once, the index plan computed once, then every catalog column is
//! resolved into the properties map. The whole-run loop walks the catalog's
//! table list strictly sequentially and fails fast on the first catalog
//! error.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::config::{IndexDefaults, Rule};
use super::error::MappingResult;
use super::filter::TableFilter;
use super::planner::plan_index;
use super::resolver::{find_rule, resolve_column};
use super::types::{DbColumn, MappingDocument};
use crate::catalog::Catalog;

/// Generates mapping documents for the tables of one catalog run
pub struct MappingGenerator {
    defaults: IndexDefaults,
    rules: Vec<Rule>,
}

/// One generated mapping: the source table, the target index identifier the
/// document should be written to, and the document itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMapping {
    /// Catalog table the document was generated from
    pub table: String,
    /// Target index identifier (prefix + table, optionally suffixed)
    pub target_index: String,
    /// The complete mapping document
    pub document: MappingDocument,
}

impl MappingGenerator {
    /// Create a generator from loaded configuration
    pub fn new(defaults: IndexDefaults, rules: Vec<Rule>) -> Self {
        Self { defaults, rules }
    }

    /// Generate the mapping document for a single table from its columns.
    ///
    /// Deterministic given identical inputs; duplicate column names (not
    /// expected from a catalog) resolve to the last occurrence.
    pub fn generate(&self, table: &str, columns: &[DbColumn]) -> MappingDocument {
        let rule = find_rule(&self.rules, table);
        debug!(table, has_rule = rule.is_some(), "resolved rule");

        let plan = plan_index(&self.defaults, rule, table);

        let mut properties = BTreeMap::new();
        for column in columns {
            properties.insert(column.name.clone(), resolve_column(rule, column));
        }

        MappingDocument::new(plan, properties)
    }

    /// The target index identifier for a table: the configured prefix
    /// concatenated with the table name, with `_<suffix>` appended when a
    /// version token is supplied.
    pub fn target_index(&self, table: &str, suffix: Option<&str>) -> String {
        let name = format!("{}{}", self.defaults.prefix, table);
        match suffix {
            Some(suffix) if !suffix.is_empty() => format!("{name}_{suffix}"),
            _ => name,
        }
    }

    /// List the catalog's tables that pass the filter, in catalog order
    pub async fn eligible_tables(
        &self,
        catalog: &dyn Catalog,
        filter: &TableFilter,
    ) -> MappingResult<Vec<String>> {
        let tables = catalog.table_names().await?;
        let eligible: Vec<String> = tables
            .into_iter()
            .filter(|table| filter.is_eligible(table))
            .collect();
        info!(count = eligible.len(), "eligible tables");
        Ok(eligible)
    }

    /// Generate the mapping for one table, pulling its columns from the
    /// catalog
    pub async fn generate_for(
        &self,
        catalog: &dyn Catalog,
        table: &str,
        suffix: Option<&str>,
    ) -> MappingResult<GeneratedMapping> {
        let columns = catalog.columns(table).await?;
        debug!(table, columns = columns.len(), "loaded catalog columns");
        Ok(GeneratedMapping {
            table: table.to_string(),
            target_index: self.target_index(table, suffix),
            document: self.generate(table, &columns),
        })
    }

    /// Generate mappings for every eligible table, sequentially in catalog
    /// order. The first catalog failure aborts the run.
    pub async fn generate_all(
        &self,
        catalog: &dyn Catalog,
        filter: &TableFilter,
        suffix: Option<&str>,
    ) -> MappingResult<Vec<GeneratedMapping>> {
        let tables = self.eligible_tables(catalog, filter).await?;
        let mut generated = Vec::with_capacity(tables.len());
        for table in &tables {
            generated.push(self.generate_for(catalog, table, suffix).await?);
        }
        Ok(generated)
    }
}
