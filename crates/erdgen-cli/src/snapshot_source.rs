use std::path::PathBuf;

use async_trait::async_trait;
use erdgen_core::{ModelDescriptor, ModelSnapshot, Result};
use erdgen_introspect::{DiscoverOptions, ModelSource};

/// Prefix of join models generated for has-and-belongs-to-many relations.
const JOIN_MODEL_PREFIX: &str = "HABTM_";

/// Model source reading a JSON snapshot written by `erdgen discover` or
/// exported by an application.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ModelSource for SnapshotSource {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    async fn discover(&self, _opts: &DiscoverOptions) -> Result<Vec<ModelDescriptor>> {
        let snapshot = ModelSnapshot::read(&self.path)?;
        let total = snapshot.models.len();
        let models: Vec<ModelDescriptor> = snapshot
            .models
            .into_iter()
            .filter(|model| !model.name.starts_with(JOIN_MODEL_PREFIX))
            .collect();

        tracing::info!(
            event = "discovery_finished",
            source = "snapshot",
            path = %self.path.display(),
            models = models.len(),
            join_models_dropped = total - models.len()
        );
        Ok(models)
    }
}
