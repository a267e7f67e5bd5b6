//! Schema catalog access
//!
//! The catalog supplies the table list of the active database and the
//! columns of each table, lowercased at this boundary. Query failures
//! propagate to the caller; there are no retries.

use async_trait::async_trait;
use sqlx::Row;
use sqlx::mysql::MySqlPool;

use crate::mapping::error::MappingResult;
use crate::mapping::types::DbColumn;

/// A source of schema metadata for the active database
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Table names of the active database, in catalog order
    async fn table_names(&self) -> MappingResult<Vec<String>>;

    /// Columns of one table: lowercased name and native type, in catalog
    /// order
    async fn columns(&self, table: &str) -> MappingResult<Vec<DbColumn>>;
}

/// Catalog backed by a MySQL `information_schema`
pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    /// Connect to the database named in the connection URI
    pub async fn connect(uri: &str) -> MappingResult<Self> {
        let pool = MySqlPool::connect(uri).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing connection pool
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for MySqlCatalog {
    async fn table_names(&self) -> MappingResult<Vec<String>> {
        let rows = sqlx::query(
            "select t.table_name name from information_schema.tables t \
             where t.table_schema = database()",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| Ok(row.try_get::<String, _>(0)?))
            .collect()
    }

    async fn columns(&self, table: &str) -> MappingResult<Vec<DbColumn>> {
        let rows = sqlx::query(
            "select lower(column_name), lower(data_type) from information_schema.columns t \
             where t.table_schema = database() and t.table_name = ?",
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(DbColumn {
                    name: row.try_get(0)?,
                    native_type: row.try_get(1)?,
                })
            })
            .collect()
    }
}
