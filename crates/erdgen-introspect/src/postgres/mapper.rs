use erdgen_core::{AssociationDescriptor, ColumnDescriptor};

use crate::naming::model_name;
use crate::options::{DiscoverOptions, INTERNAL_TABLES};

use super::queries::{RawColumn, RawForeignKey};

pub fn filter_schemas(raw: Vec<String>, opts: &DiscoverOptions) -> Vec<String> {
    raw.into_iter()
        .filter(|schema| {
            let is_system = schema.starts_with("pg_") || schema == "information_schema";
            match &opts.schemas {
                Some(list) => list.iter().any(|item| item == schema),
                None => opts.include_system_schemas || !is_system,
            }
        })
        .collect()
}

pub fn filter_tables(raw: Vec<String>, opts: &DiscoverOptions) -> Vec<String> {
    raw.into_iter()
        .filter(|table| opts.include_internal_tables || !INTERNAL_TABLES.contains(&table.as_str()))
        .collect()
}

/// A join table has no primary key and every column starts a foreign key.
pub fn is_join_table(columns: &[RawColumn], fks: &[RawForeignKey], has_primary_key: bool) -> bool {
    !has_primary_key
        && !columns.is_empty()
        && columns
            .iter()
            .all(|column| fks.iter().any(|fk| fk.column_name == column.name))
}

/// Framework-style type token for a Postgres type name.
pub fn base_type(type_name: &str, type_kind: &str) -> String {
    if type_kind == "e" {
        return "enum".to_string();
    }

    let token = match type_name {
        "int2" | "int4" | "int8" => "integer",
        "varchar" | "bpchar" | "citext" => "string",
        "text" => "text",
        "bool" => "boolean",
        "timestamp" | "timestamptz" => "datetime",
        "date" => "date",
        "time" | "timetz" => "time",
        "numeric" => "decimal",
        "float4" | "float8" => "float",
        "bytea" => "binary",
        "json" => "json",
        "jsonb" => "jsonb",
        "uuid" => "uuid",
        "inet" => "inet",
        "interval" => "interval",
        other => other,
    };
    token.to_string()
}

pub fn map_columns(raw: &[RawColumn]) -> Vec<ColumnDescriptor> {
    raw.iter()
        .map(|col| ColumnDescriptor {
            name: col.name.clone(),
            base_type: base_type(&col.type_name, &col.type_kind),
            is_array: col.is_array,
        })
        .collect()
}

/// Belongs-to associations ordered by the position of their key column.
///
/// Foreign keys name their target table. With polymorphic detection on, a
/// `<x>_id` column paired with `<x>_type` and no foreign key becomes a
/// polymorphic association.
pub fn map_associations(
    columns: &[RawColumn],
    fks: &[RawForeignKey],
    opts: &DiscoverOptions,
) -> Vec<AssociationDescriptor> {
    let mut keyed: Vec<(usize, AssociationDescriptor)> = fks
        .iter()
        .map(|fk| {
            let position = column_index(columns, &fk.column_name)
                .unwrap_or(fk.column_position.max(0) as usize);
            let target = model_name(&fk.referenced_schema, &fk.referenced_table, opts.naming);
            (position, AssociationDescriptor::belongs_to(target))
        })
        .collect();

    if opts.detect_polymorphic {
        for (position, column) in columns.iter().enumerate() {
            let Some(prefix) = column.name.strip_suffix("_id") else {
                continue;
            };
            if prefix.is_empty() {
                continue;
            }
            let type_column = format!("{prefix}_type");
            let has_type_column = columns.iter().any(|other| other.name == type_column);
            let has_fk = fks.iter().any(|fk| fk.column_name == column.name);
            if has_type_column && !has_fk {
                keyed.push((position, AssociationDescriptor::polymorphic()));
            }
        }
    }

    keyed.sort_by_key(|(position, _)| *position);
    keyed.into_iter().map(|(_, association)| association).collect()
}

fn column_index(columns: &[RawColumn], name: &str) -> Option<usize> {
    columns.iter().position(|column| column.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingStyle;

    fn column(name: &str, type_name: &str, type_kind: &str, is_array: bool) -> RawColumn {
        RawColumn {
            name: name.to_string(),
            type_name: type_name.to_string(),
            type_kind: type_kind.to_string(),
            is_array,
        }
    }

    fn fk(column_name: &str, position: i16, schema: &str, table: &str) -> RawForeignKey {
        RawForeignKey {
            column_name: column_name.to_string(),
            column_position: position,
            referenced_schema: schema.to_string(),
            referenced_table: table.to_string(),
        }
    }

    #[test]
    fn maps_array_element_types() {
        let columns = map_columns(&[
            column("contract_period_years", "int4", "b", true),
            column("tags", "varchar", "b", true),
            column("ordered_toppings", "pizza_toppings", "e", true),
            column("name", "varchar", "b", false),
        ]);

        let rendered: Vec<String> = columns.iter().map(erdgen_core::describe_column).collect();
        assert_eq!(
            rendered,
            [
                "array[integer] contract_period_years",
                "array[string] tags",
                "array[enum] ordered_toppings",
                "string name",
            ]
        );
    }

    #[test]
    fn unknown_types_pass_through() {
        assert_eq!(base_type("tsvector", "b"), "tsvector");
        assert_eq!(base_type("timestamptz", "b"), "datetime");
        assert_eq!(base_type("mood", "e"), "enum");
    }

    #[test]
    fn associations_follow_column_order() {
        let columns = [
            column("id", "int8", "b", false),
            column("record_type", "varchar", "b", false),
            column("record_id", "int8", "b", false),
            column("user_id", "int8", "b", false),
            column("account_id", "int8", "b", false),
        ];
        let fks = [
            fk("account_id", 5, "billing", "accounts"),
            fk("user_id", 4, "public", "users"),
        ];

        let associations = map_associations(&columns, &fks, &DiscoverOptions::default());
        assert_eq!(
            associations,
            vec![
                AssociationDescriptor::polymorphic(),
                AssociationDescriptor::belongs_to("User"),
                AssociationDescriptor::belongs_to("Billing::Account"),
            ]
        );
    }

    #[test]
    fn polymorphic_detection_can_be_disabled() {
        let columns = [
            column("record_type", "varchar", "b", false),
            column("record_id", "int8", "b", false),
        ];
        let opts = DiscoverOptions {
            detect_polymorphic: false,
            ..DiscoverOptions::default()
        };
        assert!(map_associations(&columns, &[], &opts).is_empty());
    }

    #[test]
    fn type_column_with_foreign_key_is_not_polymorphic() {
        let columns = [
            column("owner_type", "varchar", "b", false),
            column("owner_id", "int8", "b", false),
        ];
        let opts = DiscoverOptions {
            naming: NamingStyle::Table,
            ..DiscoverOptions::default()
        };
        let associations = map_associations(&columns, &[fk("owner_id", 2, "public", "owners")], &opts);
        assert_eq!(associations, vec![AssociationDescriptor::belongs_to("owners")]);
    }

    #[test]
    fn filters_system_schemas_and_internal_tables() {
        let opts = DiscoverOptions::default();
        let schemas = filter_schemas(
            vec![
                "billing".to_string(),
                "information_schema".to_string(),
                "pg_catalog".to_string(),
                "public".to_string(),
            ],
            &opts,
        );
        assert_eq!(schemas, ["billing", "public"]);

        let tables = filter_tables(
            vec![
                "ar_internal_metadata".to_string(),
                "schema_migrations".to_string(),
                "users".to_string(),
            ],
            &opts,
        );
        assert_eq!(tables, ["users"]);
    }

    #[test]
    fn filters_join_tables() {
        let columns = [
            column("post_id", "int8", "b", false),
            column("tag_id", "int8", "b", false),
        ];
        let fks = [
            fk("post_id", 1, "public", "posts"),
            fk("tag_id", 2, "public", "tags"),
        ];
        assert!(is_join_table(&columns, &fks, false));
        assert!(!is_join_table(&columns, &fks, true));
        assert!(!is_join_table(&columns, &fks[..1], false));
        assert!(!is_join_table(&[], &[], false));

        let with_payload = [
            column("post_id", "int8", "b", false),
            column("tag_id", "int8", "b", false),
            column("position", "int4", "b", false),
        ];
        assert!(!is_join_table(&with_payload, &fks, false));
    }
}
