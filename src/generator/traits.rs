use async_trait::async_trait;

use crate::{error::ServiceError, generator::GeneratorMetadata};

/// Seam between the HTTP layer and video generation. The current backend
/// is a stub; a real generator replaces it behind this trait without
/// touching the routes.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    fn metadata(&self) -> GeneratorMetadata;

    /// Produces the URL of a video for `prompt`. The prompt is assumed
    /// to be non-empty; presence is validated at the HTTP layer.
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}
