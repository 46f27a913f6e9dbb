use serde::Serialize;
use serde_json::Value;

pub const TRANSLATION_PLACEHOLDER: &str = "_______________";
pub const TRANSCRIPTION_PLACEHOLDER: &str = "ˈtest";

/// Fields of a generate call that the mock looks at.
///
/// Built leniently from the raw body: anything that is not a JSON object is
/// treated as `{}`, and fields of the wrong type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: Option<String>,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let value = match serde_json::from_slice::<Value>(body) {
            Ok(value) => value,
            Err(e) => {
                if !body.is_empty() {
                    tracing::debug!(error = %e, "Generate body is not JSON, treating as empty");
                }
                return Self::default();
            }
        };

        let Some(object) = value.as_object() else {
            tracing::debug!("Generate body is not a JSON object, treating as empty");
            return Self::default();
        };

        Self {
            model: object
                .get("model")
                .and_then(Value::as_str)
                .map(str::to_string),
            prompt: object
                .get("prompt")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub text: String,
}

/// Canned word card returned for every generate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResponse {
    pub word: String,
    pub translation: String,
    pub transcription: String,
    pub example: [Example; 2],
}

impl GenerationResponse {
    pub fn for_word(word: impl Into<String>) -> Self {
        let word = word.into();
        let example = [
            Example {
                text: format!("This is a test sentence with the word '{word}'."),
            },
            Example {
                text: format!("Another example using '{word}' in context."),
            },
        ];

        Self {
            word,
            translation: TRANSLATION_PLACEHOLDER.to_string(),
            transcription: TRANSCRIPTION_PLACEHOLDER.to_string(),
            example,
        }
    }
}
