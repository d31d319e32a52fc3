use crate::naming::NamingStyle;

/// Tables maintained by migration tooling rather than the application.
pub const INTERNAL_TABLES: &[&str] = &["schema_migrations", "ar_internal_metadata"];

/// Options that control how discovery behaves.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    pub include_system_schemas: bool,
    pub include_internal_tables: bool,
    /// Keep tables without a primary key whose columns are all foreign keys.
    pub include_join_tables: bool,
    /// Treat `<x>_type` + `<x>_id` column pairs as polymorphic associations.
    pub detect_polymorphic: bool,
    pub naming: NamingStyle,
    pub schemas: Option<Vec<String>>,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            include_system_schemas: false,
            include_internal_tables: false,
            include_join_tables: false,
            detect_polymorphic: true,
            naming: NamingStyle::Class,
            schemas: None,
        }
    }
}
