use async_trait::async_trait;

use erdgen_core::{ModelDescriptor, Result};

use crate::options::DiscoverOptions;

/// Trait implemented by sources that can enumerate models for the diagram.
#[async_trait]
pub trait ModelSource {
    /// Returns the source identifier (e.g. `postgres`).
    fn name(&self) -> &'static str;

    /// Discover models in a stable order.
    async fn discover(&self, opts: &DiscoverOptions) -> Result<Vec<ModelDescriptor>>;
}
