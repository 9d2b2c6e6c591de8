//! Generative AI client — the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! Content generators depend on the `TextGenerator` trait rather than the
//! concrete client, so tests and offline runs can substitute their own
//! backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum GenAiError {
    /// The backend could not be reached or returned no usable text:
    /// transport errors, timeouts, non-2xx statuses, empty candidates.
    #[error("AI backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered, but its text failed to decode as the JSON
    /// shape the prompt asked for.
    #[error("AI backend returned unparseable content: {0}")]
    Unparseable(String),
}

/// Anything that can turn a prompt into model text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let mut out = String::new();
        for part in &candidate.content.parts {
            if let Some(text) = &part.text {
                out.push_str(text);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// HTTP client for the Gemini `generateContent` endpoint.
/// Model name and request timeout come from configuration.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: std::time::Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }

    /// Makes a single call to the Gemini API. Failures are returned to the
    /// caller rather than retried.
    async fn call(&self, prompt: &str) -> Result<String, GenAiError> {
        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenAiError::Unreachable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenAiError::Unreachable(format!(
                "API returned {status}: {message}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenAiError::Unreachable(format!("malformed API response: {e}")))?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.text().ok_or_else(|| {
            GenAiError::Unreachable("response contained no text candidates".to_string())
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        self.call(prompt).await
    }
}

/// Normalizes model output before JSON decoding: strips markdown code
/// fences and collapses pretty-printed output onto a single line.
pub fn clean_model_json(raw: &str) -> String {
    let trimmed = raw.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let unfenced = unfenced.strip_suffix("```").unwrap_or(unfenced);
    unfenced.lines().map(str::trim).collect()
}

/// Prompts the backend and decodes its cleaned text as `T`.
/// The prompt must instruct the model to return valid JSON.
pub async fn generate_json<T: DeserializeOwned>(
    backend: &dyn TextGenerator,
    prompt: &str,
) -> Result<T, GenAiError> {
    let raw = backend.generate(prompt).await?;
    let cleaned = clean_model_json(&raw);
    serde_json::from_str(&cleaned).map_err(|e| GenAiError::Unparseable(e.to_string()))
}

/// Logs a generation failure before the caller falls back to canned
/// content. Unreachable backends log at `warn`, undecodable output at
/// `error`.
pub fn log_fallback(kind: &str, err: &GenAiError) {
    match err {
        GenAiError::Unreachable(_) => {
            warn!(content_kind = kind, error = %err, "AI backend unavailable, serving mock content");
        }
        GenAiError::Unparseable(_) => {
            error!(content_kind = kind, error = %err, "AI backend output rejected, serving mock content");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Err(GenAiError::Unreachable("connection refused".to_string()))
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        key: String,
    }

    #[test]
    fn test_clean_model_json_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(clean_model_json(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_clean_model_json_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(clean_model_json(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_clean_model_json_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(clean_model_json(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_clean_model_json_collapses_pretty_printing() {
        let input = "```json\n{\n  \"key\": \"value\"\n}\n```";
        assert_eq!(clean_model_json(input), "{\"key\": \"value\"}");
    }

    #[tokio::test]
    async fn test_generate_json_parses_canned_output() {
        let backend = Canned("```json\n{\"key\": \"ok\"}\n```");
        let payload: Payload = generate_json(&backend, "prompt").await.unwrap();
        assert_eq!(payload.key, "ok");
    }

    #[tokio::test]
    async fn test_generate_json_propagates_unreachable() {
        let err = generate_json::<Payload>(&Failing, "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::Unreachable(_)));
    }

    #[tokio::test]
    async fn test_generate_json_flags_undecodable_output() {
        let backend = Canned("I cannot help with that.");
        let err = generate_json::<Payload>(&backend, "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::Unparseable(_)));
    }
}
