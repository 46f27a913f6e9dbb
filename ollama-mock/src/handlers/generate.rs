use crate::models::{GenerationRequest, GenerationResponse};
use crate::services::{match_word, record_generation};
use axum::{body::Bytes, Json};

/// `POST /v1/generate`, `POST /api/generate`
///
/// Never rejects: the body is read raw so a missing or malformed payload falls
/// through to the `unknown` word instead of an extractor rejection.
pub async fn generate(body: Bytes) -> Json<GenerationResponse> {
    let request = GenerationRequest::from_body(&body);
    let matched = match_word(&request.prompt);

    tracing::info!(
        model = request.model.as_deref().unwrap_or("-"),
        word = %matched.word,
        source = matched.source.as_str(),
        "Generated word card"
    );
    record_generation(matched.source);

    Json(GenerationResponse::for_word(matched.word))
}
