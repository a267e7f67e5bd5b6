//! End-to-end generation tests against an in-memory catalog

use async_trait::async_trait;
use es_mapping_helper::mapping::generate_mappings;
use es_mapping_helper::{
    Catalog, DbColumn, GeneratorConfig, MappingDocument, MappingError, MappingGenerator,
    MappingResult, TableFilter,
};

/// Catalog fake serving a fixed set of tables in a fixed order
struct StaticCatalog {
    tables: Vec<(String, Vec<DbColumn>)>,
}

impl StaticCatalog {
    fn new(tables: Vec<(&str, Vec<(&str, &str)>)>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|(name, columns)| {
                    let columns = columns
                        .into_iter()
                        .map(|(col, native)| DbColumn::new(col, native))
                        .collect();
                    (name.to_string(), columns)
                })
                .collect(),
        }
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn table_names(&self) -> MappingResult<Vec<String>> {
        Ok(self.tables.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn columns(&self, table: &str) -> MappingResult<Vec<DbColumn>> {
        self.tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, columns)| columns.clone())
            .ok_or(MappingError::Catalog(sqlx::Error::RowNotFound))
    }
}

/// Catalog fake whose column queries always fail
struct FailingCatalog {
    tables: Vec<String>,
}

#[async_trait]
impl Catalog for FailingCatalog {
    async fn table_names(&self) -> MappingResult<Vec<String>> {
        Ok(self.tables.clone())
    }

    async fn columns(&self, _table: &str) -> MappingResult<Vec<DbColumn>> {
        Err(MappingError::Catalog(sqlx::Error::PoolClosed))
    }
}

fn shop_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        (
            "users",
            vec![
                ("id", "bigint"),
                ("name", "varchar"),
                ("status", "varchar"),
                ("created_at", "datetime"),
            ],
        ),
        ("orders", vec![("id", "bigint"), ("total", "decimal")]),
        ("audit_log", vec![("payload", "blob")]),
    ])
}

fn shop_config() -> GeneratorConfig {
    GeneratorConfig::from_yaml(
        r#"
database:
  uri: "mysql://app@localhost/shop"
index:
  prefix: "shop_"
  shards: 3
  replicas: 1
rules:
  - table: users
    index: member
    shards: 5
    replicas: 2
    searchableColumns:
      - name
    columns:
      - name: status
        type: keyword
"#,
    )
    .unwrap()
}

mod generation_tests {
    use super::*;

    #[tokio::test]
    async fn test_generates_one_document_per_table_in_catalog_order() {
        let config = shop_config();
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, None).await.unwrap();
        let tables: Vec<&str> = generated.iter().map(|g| g.table.as_str()).collect();
        assert_eq!(tables, vec!["users", "orders", "audit_log"]);
    }

    #[tokio::test]
    async fn test_rule_overrides_are_applied() {
        let config = shop_config();
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, None).await.unwrap();
        let users = &generated[0];

        assert_eq!(users.target_index, "shop_users");
        assert_eq!(users.document.settings.index.number_of_shards, 5);
        assert_eq!(users.document.settings.index.number_of_replicas, 2);

        let properties = &users.document.mappings["member"].properties;
        assert_eq!(properties.len(), 4);
        assert_eq!(properties["name"].field_type, "text");
        assert_eq!(properties["name"].analyzer.as_deref(), Some("ik_max_word"));
        assert_eq!(properties["status"].field_type, "keyword");
        assert_eq!(properties["id"].field_type, "long");
        assert_eq!(properties["created_at"].field_type, "date");
    }

    #[tokio::test]
    async fn test_table_without_rule_gets_global_defaults() {
        let config = shop_config();
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, None).await.unwrap();
        let orders = &generated[1];

        assert_eq!(orders.document.settings.index.number_of_shards, 3);
        assert_eq!(orders.document.settings.index.number_of_replicas, 1);

        let properties = &orders.document.mappings["orders"].properties;
        assert_eq!(properties["total"].field_type, "double");
        assert_eq!(properties["total"].analyzer, None);
    }

    #[tokio::test]
    async fn test_timestamp_suffix_lands_in_target_index() {
        let config = shop_config();
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, Some("202608061200"))
            .await
            .unwrap();
        assert_eq!(generated[0].target_index, "shop_users_202608061200");
        assert_eq!(generated[1].target_index, "shop_orders_202608061200");
    }
}

mod filtering_tests {
    use super::*;

    #[tokio::test]
    async fn test_allow_list_restricts_tables() {
        let mut config = shop_config();
        config.tables = vec!["user*".to_string(), "orders".to_string()];
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, None).await.unwrap();
        let tables: Vec<&str> = generated.iter().map(|g| g.table.as_str()).collect();
        assert_eq!(tables, vec!["users", "orders"]);
    }

    #[tokio::test]
    async fn test_empty_allow_list_admits_everything() {
        let config = shop_config();
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, None).await.unwrap();
        assert_eq!(generated.len(), 3);
    }

    #[tokio::test]
    async fn test_bad_pattern_aborts_before_any_table() {
        let mut config = shop_config();
        config.tables = vec!["users[".to_string()];
        let catalog = shop_catalog();

        let err = generate_mappings(&config, &catalog, None).await.unwrap_err();
        assert!(matches!(err, MappingError::InvalidPattern { .. }));
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_failure_aborts_the_run() {
        let config = shop_config();
        let catalog = FailingCatalog {
            tables: vec!["users".to_string(), "orders".to_string()],
        };

        let err = generate_mappings(&config, &catalog, None).await.unwrap_err();
        assert!(matches!(err, MappingError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_missing_table_propagates() {
        let config = shop_config();
        let catalog = shop_catalog();
        let generator = MappingGenerator::new(config.index, config.rules);

        let err = generator
            .generate_for(&catalog, "missing", None)
            .await
            .unwrap_err();
        assert!(matches!(err, MappingError::Catalog(_)));
    }
}

mod serialization_tests {
    use super::*;

    #[tokio::test]
    async fn test_documents_round_trip_losslessly() {
        let config = shop_config();
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, None).await.unwrap();
        for item in &generated {
            let json = item.document.to_json_pretty().unwrap();
            let parsed: MappingDocument = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, item.document, "{}", item.table);
        }
    }

    #[tokio::test]
    async fn test_output_never_contains_empty_analyzers() {
        let mut config = shop_config();
        // Explicit empty-string analyzers in the configuration
        config.rules[0].columns[0].analyzer = Some(String::new());
        config.rules[0].columns[0].search_analyzer = Some(String::new());
        let catalog = shop_catalog();

        let generated = generate_mappings(&config, &catalog, None).await.unwrap();
        for item in &generated {
            let json = item.document.to_json_pretty().unwrap();
            assert!(!json.contains("\"\""), "{}", item.table);
            assert!(!json.contains("null"), "{}", item.table);
        }
    }

    #[tokio::test]
    async fn test_identical_inputs_produce_identical_output() {
        let config = shop_config();
        let catalog = shop_catalog();

        let first = generate_mappings(&config, &catalog, None).await.unwrap();
        let second = generate_mappings(&config, &catalog, None).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_eligible_tables_preserve_catalog_order() {
        let config = shop_config();
        let catalog = shop_catalog();
        let generator = MappingGenerator::new(config.index, config.rules);
        let filter = TableFilter::allow_all();

        let tables = generator.eligible_tables(&catalog, &filter).await.unwrap();
        assert_eq!(tables, vec!["users", "orders", "audit_log"]);
    }
}
