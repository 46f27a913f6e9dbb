use crate::models::{ModelDescriptor, DEFAULT_MODEL};
use axum::Json;

/// `GET /v1/list`, `GET /api/tags`
pub async fn list_models() -> Json<[ModelDescriptor; 1]> {
    Json([DEFAULT_MODEL])
}
