use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Namespace delimiter used in fully-qualified model names.
pub const NAMESPACE_DELIMITER: &str = "::";

/// Replace the namespace delimiter so the name is a valid diagram identifier.
pub fn sanitize_name(name: &str) -> String {
    name.replace(NAMESPACE_DELIMITER, "_")
}

/// A discovered model (entity type) and the metadata the diagram needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModelDescriptor {
    /// Fully-qualified model name, possibly containing `::`.
    pub name: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default = "default_true")]
    pub table_exists: bool,
    /// Columns in table-definition order.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    /// Belongs-to associations in reflection order.
    #[serde(default)]
    pub associations: Vec<AssociationDescriptor>,
}

impl ModelDescriptor {
    /// A concrete, table-backed model with no columns or associations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            table_exists: true,
            columns: Vec::new(),
            associations: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_association(mut self, association: AssociationDescriptor) -> Self {
        self.associations.push(association);
        self
    }

    /// Check the fields the renderer relies on.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "model name must not be blank".to_string(),
            ));
        }

        for (position, column) in self.columns.iter().enumerate() {
            if column.name.trim().is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "column #{} of model {} has a blank name",
                    position + 1,
                    self.name
                )));
            }
            if column.base_type.trim().is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "column {}.{} has a blank type",
                    self.name, column.name
                )));
            }
        }

        Ok(())
    }
}

/// Column metadata: name, base type token and array flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Type token such as `integer`, `string` or `enum`.
    pub base_type: String,
    #[serde(default)]
    pub is_array: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: base_type.into(),
            is_array: false,
        }
    }

    pub fn array(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            is_array: true,
            ..Self::new(name, base_type)
        }
    }
}

/// A single belongs-to relation. Does not own the target model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssociationDescriptor {
    /// Target model name; empty when it cannot be resolved.
    #[serde(default)]
    pub target_class_name: String,
    #[serde(default)]
    pub is_polymorphic: bool,
}

impl AssociationDescriptor {
    pub fn belongs_to(target: impl Into<String>) -> Self {
        Self {
            target_class_name: target.into(),
            is_polymorphic: false,
        }
    }

    pub fn polymorphic() -> Self {
        Self {
            target_class_name: String::new(),
            is_polymorphic: true,
        }
    }
}

fn default_true() -> bool {
    true
}
