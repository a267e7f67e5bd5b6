//! Rule and column resolution
//!
//! `find_rule` associates a table with at most one override rule;
//! `resolve_column` decides the final field mapping for a single column by
//! applying the precedence: searchable-column override, then explicit
//! per-column setting, then the default native-type translation.

use super::config::{ColumnSetting, Rule};
use super::typemap::FieldType;
use super::types::{DbColumn, FieldMapping};

/// Analyzer assigned to searchable columns
const SEARCHABLE_ANALYZER: &str = "ik_max_word";

/// Find the rule for a table: first exact match in the ordered rule list.
///
/// Matching is case-sensitive, as configured. Duplicate rules for the same
/// table resolve to the first entry.
pub fn find_rule<'a>(rules: &'a [Rule], table: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.table == table)
}

/// Resolve the field mapping for one catalog column.
///
/// A column listed in the rule's searchable columns is always mapped as
/// full-text with the searchable analyzer pair, even when an explicit column
/// setting exists for it.
pub fn resolve_column(rule: Option<&Rule>, column: &DbColumn) -> FieldMapping {
    if let Some(rule) = rule {
        if rule
            .searchable_columns
            .iter()
            .any(|name| name.eq_ignore_ascii_case(&column.name))
        {
            return FieldMapping::of_type(FieldType::Text.as_str())
                .with_analyzer(SEARCHABLE_ANALYZER)
                .with_search_analyzer(SEARCHABLE_ANALYZER);
        }

        if let Some(setting) = rule
            .columns
            .iter()
            .find(|setting| setting.name.eq_ignore_ascii_case(&column.name))
        {
            return from_setting(setting);
        }
    }

    FieldMapping::from_field_type(FieldType::from_native(&column.native_type))
}

/// Build a field mapping from an explicit column setting.
///
/// The type is carried verbatim without validation. Empty-string analyzers
/// count as absent so they never reach serialized output.
fn from_setting(setting: &ColumnSetting) -> FieldMapping {
    FieldMapping {
        field_type: setting.field_type.clone(),
        analyzer: non_empty(setting.analyzer.as_deref()),
        search_analyzer: non_empty(setting.search_analyzer.as_deref()),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
