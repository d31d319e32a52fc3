use sqlx::PgPool;

use erdgen_core::{ModelDescriptor, Result};

use crate::adapter::ModelSource;
use crate::naming::model_name;
use crate::options::DiscoverOptions;

mod mapper;
mod queries;

/// Model source backed by the PostgreSQL catalog.
#[derive(Debug, Clone)]
pub struct PostgresSource {
    pool: PgPool,
}

impl PostgresSource {
    /// Create a new source using a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ModelSource for PostgresSource {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn discover(&self, opts: &DiscoverOptions) -> Result<Vec<ModelDescriptor>> {
        discover_postgres(&self.pool, opts).await
    }
}

/// Discover one model per table, ordered by schema then table name.
pub async fn discover_postgres(pool: &PgPool, opts: &DiscoverOptions) -> Result<Vec<ModelDescriptor>> {
    let schemas = mapper::filter_schemas(queries::list_schemas(pool).await?, opts);
    let mut models = Vec::new();

    for schema_name in schemas {
        let tables = mapper::filter_tables(
            queries::list_tables_in_schema(pool, &schema_name).await?,
            opts,
        );
        tracing::debug!(event = "schema_scanned", schema = %schema_name, tables = tables.len());

        for table_name in tables {
            let raw_columns = queries::list_columns(pool, &schema_name, &table_name).await?;
            let raw_fks = queries::list_foreign_keys(pool, &schema_name, &table_name).await?;

            if !opts.include_join_tables
                && mapper::is_join_table(
                    &raw_columns,
                    &raw_fks,
                    queries::has_primary_key(pool, &schema_name, &table_name).await?,
                )
            {
                tracing::debug!(
                    event = "join_table_skipped",
                    schema = %schema_name,
                    table = %table_name
                );
                continue;
            }

            models.push(ModelDescriptor {
                name: model_name(&schema_name, &table_name, opts.naming),
                is_abstract: false,
                table_exists: true,
                columns: mapper::map_columns(&raw_columns),
                associations: mapper::map_associations(&raw_columns, &raw_fks, opts),
            });
        }
    }

    tracing::info!(event = "discovery_finished", source = "postgres", models = models.len());
    Ok(models)
}
