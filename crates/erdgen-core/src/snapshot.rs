use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::descriptor::ModelDescriptor;
use crate::error::{Error, Result};

/// Current contract version for model snapshot files.
pub const SNAPSHOT_VERSION: &str = "0.1";

/// Serialized set of discovered models, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModelSnapshot {
    /// Contract version for this snapshot format.
    pub version: String,
    /// Source the models were discovered from (e.g. `postgres`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub models: Vec<ModelDescriptor>,
}

impl ModelSnapshot {
    pub fn new(source: impl Into<String>, models: Vec<ModelDescriptor>) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            source: Some(source.into()),
            models,
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(content).map_err(|err| Error::Snapshot(err.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(Error::Snapshot(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            )));
        }

        Ok(snapshot)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::Snapshot(err.to_string()))
    }
}

/// JSON Schema describing the snapshot file format.
pub fn snapshot_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(ModelSnapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_version() {
        let err = ModelSnapshot::from_json(r#"{ "version": "9.9", "models": [] }"#).unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot version 9.9"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ModelSnapshot::from_json("{ not json"),
            Err(Error::Snapshot(_))
        ));
    }

    #[test]
    fn schema_lists_model_fields() {
        let schema = serde_json::to_value(snapshot_json_schema()).expect("serialize schema");
        let definitions = &schema["definitions"];
        assert!(definitions["ModelDescriptor"]["properties"]["table_exists"].is_object());
        assert!(definitions["ColumnDescriptor"]["properties"]["is_array"].is_object());
        assert!(definitions["AssociationDescriptor"]["properties"]["is_polymorphic"].is_object());
    }
}
