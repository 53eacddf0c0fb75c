use serde::{Deserialize, Serialize};

/// Body of `POST /api/text-to-video`. The field is defaulted so that a
/// missing key and an explicit `null` both deserialize and reach
/// validation instead of being rejected by serde.
#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub video_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorMetadata {
    pub name: String,
    pub placeholder: bool,
    pub video_url: String,
}
