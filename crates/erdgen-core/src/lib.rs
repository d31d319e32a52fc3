//! Core pipeline for erdgen.
//!
//! This crate defines the model descriptors, the name filter, and the
//! renderer that turns a discovered data model into a Mermaid ERD.

pub mod config;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod filter;
pub mod pattern;
pub mod pipeline;
pub mod render;
pub mod snapshot;

pub use config::{ConfigFormat, FilterConfig};
pub use describe::{Omission, association_edge, describe_association, describe_column};
pub use descriptor::{
    AssociationDescriptor, ColumnDescriptor, ModelDescriptor, NAMESPACE_DELIMITER, sanitize_name,
};
pub use error::{Error, Result};
pub use filter::is_eligible;
pub use pattern::NamePattern;
pub use pipeline::generate;
pub use render::{DiagramText, render_model};
pub use snapshot::{ModelSnapshot, SNAPSHOT_VERSION, snapshot_json_schema};
