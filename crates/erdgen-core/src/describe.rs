use crate::config::FilterConfig;
use crate::descriptor::{AssociationDescriptor, ColumnDescriptor, sanitize_name};
use crate::filter::is_eligible;

/// Relationship marker for "many of self reference exactly one of target".
pub const BELONGS_TO_MARKER: &str = "}o--||";

/// Diagram type token for a column: `base` or `array[base]`.
pub fn column_type(column: &ColumnDescriptor) -> String {
    if column.is_array {
        format!("array[{}]", column.base_type)
    } else {
        column.base_type.clone()
    }
}

/// Render a column as `"<type> <name>"`.
pub fn describe_column(column: &ColumnDescriptor) -> String {
    format!("{} {}", column_type(column), column.name)
}

/// Why an association produced no edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Omission {
    Polymorphic,
    BlankTarget,
    FilteredTarget,
}

impl Omission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polymorphic => "polymorphic",
            Self::BlankTarget => "blank_target",
            Self::FilteredTarget => "filtered_target",
        }
    }
}

/// Render a belongs-to edge from `self_name`, or say why it is omitted.
pub fn association_edge(
    association: &AssociationDescriptor,
    self_name: &str,
    config: &FilterConfig,
) -> Result<String, Omission> {
    if association.is_polymorphic {
        return Err(Omission::Polymorphic);
    }

    let target = association.target_class_name.trim();
    if target.is_empty() {
        return Err(Omission::BlankTarget);
    }

    if !is_eligible(target, config) {
        return Err(Omission::FilteredTarget);
    }

    Ok(format!(
        "  {} {BELONGS_TO_MARKER} {} : belongs_to",
        sanitize_name(self_name),
        sanitize_name(target)
    ))
}

/// Render a belongs-to edge, or `None` when policy omits it.
pub fn describe_association(
    association: &AssociationDescriptor,
    self_name: &str,
    config: &FilterConfig,
) -> Option<String> {
    association_edge(association, self_name, config).ok()
}
