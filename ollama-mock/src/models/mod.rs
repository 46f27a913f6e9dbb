pub mod generation;
pub mod model;

pub use generation::{Example, GenerationRequest, GenerationResponse};
pub use model::{ModelDescriptor, DEFAULT_MODEL};
