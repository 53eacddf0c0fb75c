mod placeholder;
mod registry;
mod traits;
mod types;

pub use placeholder::PlaceholderGenerator;
pub use registry::GeneratorRegistry;
pub use traits::VideoGenerator;
pub use types::{GenerationRequest, GenerationResponse, GeneratorMetadata};
