//! # Gemini Text Model Module
//!
//! This module implements the outbound call to Google's Generative
//! Language API. The `TextModel` trait is the seam between the recipe
//! generator and the network: production code talks to Gemini through
//! `GeminiModel`, tests substitute a stub.
//!
//! One request per generation attempt, no retry, no timeout beyond the
//! transport default. HTTP and API-level failures are classified into the
//! `GenerationError` taxonomy so the UI can show a distinct message per
//! failure class.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::generation_config::ModelConfig;
use crate::generation_errors::GenerationError;

/// A text-completion backend
///
/// Takes a fully built prompt and returns the model's raw text reply.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate a free-text completion for the given prompt
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

// Wire types for the generateContent endpoint

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfigBody,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigBody {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Gemini-backed implementation of `TextModel`
pub struct GeminiModel {
    api_key: String,
    config: ModelConfig,
    client: Client,
}

impl GeminiModel {
    /// Create a model client for the given API key with default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, ModelConfig::default())
    }

    /// Create a model client with explicit configuration
    pub fn with_config(api_key: impl Into<String>, config: ModelConfig) -> Self {
        Self {
            api_key: api_key.into(),
            config,
            client: Client::new(),
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.api_key
        )
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfigBody {
                temperature: self.config.decoding.temperature,
                top_p: self.config.decoding.top_p,
                top_k: self.config.decoding.top_k,
                max_output_tokens: self.config.decoding.max_output_tokens,
            },
        }
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
        if let Some(error) = response.error {
            return Err(classify_api_error(
                200,
                &error.message,
                error.status.as_deref(),
            ));
        }

        response
            .candidates
            .and_then(|mut candidates| {
                if candidates.is_empty() {
                    None
                } else {
                    candidates.remove(0).content
                }
            })
            .and_then(|mut content| {
                if content.parts.is_empty() {
                    None
                } else {
                    Some(content.parts.remove(0).text)
                }
            })
            .ok_or_else(|| GenerationError::Remote("No content received from Gemini".to_string()))
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.build_url();
        let request = self.build_request(prompt);

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "Sending generation request to Gemini");

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Gemini API returned an error");
            let (message, api_status) = parse_error_body(&body);
            return Err(classify_api_error(
                status.as_u16(),
                &message,
                api_status.as_deref(),
            ));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response envelope");
            GenerationError::Remote(format!("Failed to parse Gemini response: {e}"))
        })?;

        Self::extract_text(parsed)
    }
}

impl std::fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiModel")
            .field("config", &self.config)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Pull the error message and status out of a Gemini error body
///
/// Falls back to the raw body text when the error envelope does not parse.
fn parse_error_body(body: &str) -> (String, Option<String>) {
    match serde_json::from_str::<GenerateContentResponse>(body) {
        Ok(GenerateContentResponse {
            error: Some(error), ..
        }) => (error.message, error.status),
        _ => (body.to_string(), None),
    }
}

/// Map an API failure onto the generation error taxonomy
///
/// Classification looks at the HTTP status, the machine-readable status
/// string and well-known marker substrings in the message. Anything
/// unrecognized becomes a `Remote` error carrying the message verbatim.
pub fn classify_api_error(
    http_status: u16,
    message: &str,
    api_status: Option<&str>,
) -> GenerationError {
    let lowered = message.to_lowercase();

    let auth_failure = message.contains("API_KEY_INVALID")
        || message.contains("API key not valid")
        || matches!(api_status, Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED"))
        || http_status == 401
        || http_status == 403;
    if auth_failure {
        return GenerationError::InvalidApiKey(message.to_string());
    }

    let throttled =
        http_status == 429 || matches!(api_status, Some("RESOURCE_EXHAUSTED"));
    if throttled || message.contains("QUOTA_EXCEEDED") || message.contains("RATE_LIMIT_EXCEEDED") {
        if message.contains("QUOTA_EXCEEDED") || lowered.contains("quota") {
            return GenerationError::QuotaExceeded(message.to_string());
        }
        return GenerationError::RateLimited(message.to_string());
    }

    GenerationError::Remote(format!("Gemini API error ({http_status}): {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_is_classified_as_auth_error() {
        let err = classify_api_error(
            400,
            "API key not valid. Please pass a valid API key. [API_KEY_INVALID]",
            Some("INVALID_ARGUMENT"),
        );
        assert!(matches!(err, GenerationError::InvalidApiKey(_)));
    }

    #[test]
    fn test_quota_exhaustion_is_classified_as_quota_error() {
        let err = classify_api_error(
            429,
            "You exceeded your current quota, please check your plan and billing details.",
            Some("RESOURCE_EXHAUSTED"),
        );
        assert!(matches!(err, GenerationError::QuotaExceeded(_)));
    }

    #[test]
    fn test_plain_throttling_is_classified_as_rate_limit() {
        let err = classify_api_error(429, "Too many requests, slow down.", None);
        assert!(matches!(err, GenerationError::RateLimited(_)));
    }

    #[test]
    fn test_unknown_failures_pass_the_message_through() {
        let err = classify_api_error(500, "backend unavailable", Some("INTERNAL"));
        match err {
            GenerationError::Remote(msg) => assert!(msg.contains("backend unavailable")),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn test_error_body_parsing_falls_back_to_raw_text() {
        let (message, status) = parse_error_body("not json at all");
        assert_eq!(message, "not json at all");
        assert!(status.is_none());

        let (message, status) = parse_error_body(
            r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        assert_eq!(message, "quota exceeded");
        assert_eq!(status.as_deref(), Some("RESOURCE_EXHAUSTED"));
    }

    #[test]
    fn test_request_body_serializes_with_camel_case_keys() {
        let model = GeminiModel::new("test-key");
        let body = serde_json::to_value(model.build_request("hello")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert!(body["generationConfig"]["topP"].is_number());
        assert!(body["generationConfig"]["topK"].is_number());
        assert!(body["generationConfig"]["maxOutputTokens"].is_number());
    }
}
