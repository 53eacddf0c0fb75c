use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::AppConfig,
    error::ServiceError,
    generator::{GenerationRequest, GenerationResponse, GeneratorMetadata, GeneratorRegistry},
};

pub const TEXT_TO_VIDEO_PATH: &str = "/api/text-to-video";

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<GeneratorRegistry>,
}

#[derive(Serialize)]
struct MetadataResponse {
    generator: GeneratorMetadata,
}

pub fn build_router(config: &AppConfig, registry: Arc<GeneratorRegistry>) -> Router {
    let state = AppState { registry };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(TEXT_TO_VIDEO_PATH, post(text_to_video))
        .route("/metadata", get(metadata))
        .fallback(route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

async fn text_to_video(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, ServiceError> {
    let prompt = request
        .prompt
        .as_deref()
        .filter(|prompt| !prompt.is_empty())
        .ok_or(ServiceError::MissingPrompt)?;

    let response = state.registry.generate(prompt).await?;
    Ok(Json(response))
}

async fn metadata(State(state): State<AppState>) -> Json<MetadataResponse> {
    Json(MetadataResponse {
        generator: state.registry.metadata(),
    })
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use axum::body::to_bytes;
    use axum::response::Response;

    const CLIP_URL: &str =
        "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4";

    fn test_state() -> AppState {
        let config = AppConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            placeholder_video_url: CLIP_URL.into(),
            max_body_bytes: 1024,
        };
        AppState {
            registry: Arc::new(GeneratorRegistry::initialize(&config)),
        }
    }

    fn request(prompt: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.map(str::to_string),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_prompt_returns_video_url() {
        let result = text_to_video(State(test_state()), Json(request(Some("a cat running")))).await;

        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "video_url": CLIP_URL })
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected() {
        let result = text_to_video(State(test_state()), Json(request(Some("")))).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Prompt is required" })
        );
    }

    #[tokio::test]
    async fn test_missing_prompt_is_rejected() {
        let result = text_to_video(State(test_state()), Json(request(None))).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Prompt is required" })
        );
    }

    #[tokio::test]
    async fn test_video_url_is_prompt_independent() {
        let state = test_state();

        let first = text_to_video(State(state.clone()), Json(request(Some("a cat running"))))
            .await
            .unwrap();
        let second = text_to_video(State(state), Json(request(Some("sunset over mountains"))))
            .await
            .unwrap();

        assert_eq!(first.0.video_url, second.0.video_url);
        assert_eq!(first.0.video_url, CLIP_URL);
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn test_metadata_reports_active_generator() {
        let response = metadata(State(test_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["generator"]["name"], "placeholder");
        assert_eq!(body["generator"]["placeholder"], true);
        assert_eq!(body["generator"]["video_url"], CLIP_URL);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = route_not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Route not found" })
        );
    }
}
