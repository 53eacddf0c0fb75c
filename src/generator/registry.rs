use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::ServiceError,
    generator::{
        GenerationResponse, GeneratorMetadata, PlaceholderGenerator, VideoGenerator,
    },
};

/// Owns the active generation backend. Handlers go through the registry
/// only, never a concrete generator type.
pub struct GeneratorRegistry {
    backend: Arc<dyn VideoGenerator>,
}

impl GeneratorRegistry {
    pub fn initialize(config: &AppConfig) -> Self {
        let backend = PlaceholderGenerator::new(config.placeholder_video_url.clone());
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn metadata(&self) -> GeneratorMetadata {
        self.backend.metadata()
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerationResponse, ServiceError> {
        let video_url = self.backend.generate(prompt).await?;
        Ok(GenerationResponse { video_url })
    }
}
