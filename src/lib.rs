pub mod config;
pub mod error;
pub mod generator;
pub mod server;

pub use config::AppConfig;
pub use error::ServiceError;
pub use generator::{GenerationRequest, GenerationResponse, GeneratorRegistry, VideoGenerator};
pub use server::build_router;
