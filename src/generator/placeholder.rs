use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::ServiceError,
    generator::{GeneratorMetadata, VideoGenerator},
};

/// Stub backend returning the same sample clip for every prompt.
pub struct PlaceholderGenerator {
    video_url: String,
}

impl PlaceholderGenerator {
    pub fn new(video_url: String) -> Self {
        Self { video_url }
    }
}

#[async_trait]
impl VideoGenerator for PlaceholderGenerator {
    fn metadata(&self) -> GeneratorMetadata {
        GeneratorMetadata {
            name: "placeholder".to_string(),
            placeholder: true,
            video_url: self.video_url.clone(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        debug!(prompt, "serving placeholder video");
        Ok(self.video_url.clone())
    }
}
