use sqlx::{FromRow, PgPool};

use erdgen_core::{Error, Result};

fn db_error(err: sqlx::Error) -> Error {
    Error::Db(err.to_string())
}

pub async fn list_schemas(pool: &PgPool) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        select nspname::text
        from pg_namespace
        order by nspname
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(db_error)
}

pub async fn list_tables_in_schema(pool: &PgPool, schema: &str) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        r#"
        select c.relname::text
        from pg_class c
        join pg_namespace n on n.oid = c.relnamespace
        where n.nspname = $1
          and c.relkind in ('r','p')
          and not c.relispartition
        order by c.relname
        "#,
    )
    .bind(schema)
    .fetch_all(pool)
    .await
    .map_err(db_error)
}

pub async fn has_primary_key(pool: &PgPool, schema: &str, table: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        r#"
        select exists (
          select 1
          from pg_constraint con
          join pg_class c on c.oid = con.conrelid
          join pg_namespace n on n.oid = c.relnamespace
          where n.nspname = $1
            and c.relname = $2
            and con.contype = 'p'
        )
        "#,
    )
    .bind(schema)
    .bind(table)
    .fetch_one(pool)
    .await
    .map_err(db_error)
}

#[derive(Debug, Clone, FromRow)]
pub struct RawColumn {
    pub name: String,
    /// Element type name for arrays, the type name otherwise.
    pub type_name: String,
    /// `pg_type.typtype` of that type (`e` for enums).
    pub type_kind: String,
    pub is_array: bool,
}

pub async fn list_columns(pool: &PgPool, schema: &str, table: &str) -> Result<Vec<RawColumn>> {
    sqlx::query_as::<_, RawColumn>(
        r#"
        select
          a.attname::text as name,
          coalesce(et.typname, t.typname)::text as type_name,
          coalesce(et.typtype, t.typtype)::text as type_kind,
          (t.typcategory = 'A') as is_array
        from pg_attribute a
        join pg_class c on c.oid = a.attrelid
        join pg_namespace n on n.oid = c.relnamespace
        join pg_type t on t.oid = a.atttypid
        left join pg_type et on et.oid = t.typelem and t.typcategory = 'A'
        where n.nspname = $1
          and c.relname = $2
          and a.attnum > 0
          and not a.attisdropped
        order by a.attnum
        "#,
    )
    .bind(schema)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_error)
}

#[derive(Debug, Clone, FromRow)]
pub struct RawForeignKey {
    /// First constrained column, used for ordering and polymorphic pairing.
    pub column_name: String,
    pub column_position: i16,
    pub referenced_schema: String,
    pub referenced_table: String,
}

pub async fn list_foreign_keys(
    pool: &PgPool,
    schema: &str,
    table: &str,
) -> Result<Vec<RawForeignKey>> {
    sqlx::query_as::<_, RawForeignKey>(
        r#"
        select
          src_att.attname::text as column_name,
          src_att.attnum as column_position,
          ref_nsp.nspname::text as referenced_schema,
          ref_rel.relname::text as referenced_table
        from pg_constraint con
        join pg_class src_rel on src_rel.oid = con.conrelid
        join pg_namespace src_nsp on src_nsp.oid = src_rel.relnamespace
        join pg_class ref_rel on ref_rel.oid = con.confrelid
        join pg_namespace ref_nsp on ref_nsp.oid = ref_rel.relnamespace
        join pg_attribute src_att
          on src_att.attrelid = src_rel.oid and src_att.attnum = con.conkey[1]
        where src_nsp.nspname = $1
          and src_rel.relname = $2
          and con.contype = 'f'
        order by src_att.attnum, con.conname
        "#,
    )
    .bind(schema)
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_error)
}
