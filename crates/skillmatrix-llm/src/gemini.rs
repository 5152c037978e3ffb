//! Gemini Provider Implementation
//!
//! Talks to the Google Generative Language `generateContent` endpoint.
//!
//! # Features
//!
//! - Async HTTP communication with per-request timeout
//! - Configurable endpoint and model
//! - Non-2xx answers surface as [`LlmError::Api`] with status and body
//!
//! No transport-level retry: every call counts against the extractor's
//! retry budget.
//!
//! # Examples
//!
//! ```no_run
//! use skillmatrix_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("my-api-key")
//!     .unwrap()
//!     .with_model("gemini-1.5-flash");
//! ```

use crate::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use skillmatrix_domain::{GenerationParams, TextGenerator};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default timeout for a single request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

impl GeminiProvider {
    /// Create a provider for the default endpoint and model
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Other`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client,
        })
    }

    /// Use a different API endpoint (scheme and host, no path)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Model this provider talks to
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Send one `generateContent` request and return the generated text
    ///
    /// # Errors
    ///
    /// - [`LlmError::Communication`] when the request fails or times out
    /// - [`LlmError::Api`] for any non-2xx status
    /// - [`LlmError::InvalidResponse`] when the envelope cannot be decoded
    /// - [`LlmError::EmptyContent`] when no text came back
    pub async fn generate_content(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
            },
        };

        debug!("Calling {} with {} char prompt", self.model, prompt.len());

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Communication(format!("Request timed out after {:?}", self.timeout))
                } else {
                    LlmError::Communication(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Gemini API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        match envelope.text().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, Self::Error> {
        self.generate_content(prompt, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "/v1beta/models/gemini-pro:generateContent";

    fn provider(server: &MockServer) -> GeminiProvider {
        GeminiProvider::new("test-key")
            .unwrap()
            .with_endpoint(server.base_url())
    }

    #[test]
    fn test_provider_defaults() {
        let provider = GeminiProvider::new("key").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), DEFAULT_MODEL);
        assert_eq!(provider.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_url_ignores_trailing_slash() {
        let provider = GeminiProvider::new("key")
            .unwrap()
            .with_endpoint("http://localhost:9000/")
            .with_model("gemini-1.5-flash");
        assert_eq!(
            provider.url(),
            "http://localhost:9000/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PATH)
                    .header("x-goog-api-key", "test-key")
                    .json_body(json!({
                        "contents": [{ "parts": [{ "text": "extract this" }] }],
                        "generationConfig": { "temperature": 0.5, "maxOutputTokens": 512 }
                    }));
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": { "parts": [{ "text": "  {\"title\": \"x\"}\n" }] }
                    }]
                }));
            })
            .await;

        let params = GenerationParams {
            temperature: 0.5,
            max_output_tokens: 512,
        };
        let text = provider(&server)
            .generate("extract this", &params)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "{\"title\": \"x\"}");
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(403).body("API key not valid");
            })
            .await;

        let result = provider(&server)
            .generate("prompt", &GenerationParams::default())
            .await;

        match result {
            Err(LlmError::Api { status, body }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_candidates_is_empty_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let result = provider(&server)
            .generate("prompt", &GenerationParams::default())
            .await;
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_garbage_envelope_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let result = provider(&server)
            .generate("prompt", &GenerationParams::default())
            .await;
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let provider = GeminiProvider::new("key")
            .unwrap()
            .with_endpoint("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));

        let result = provider.generate("test", &GenerationParams::default()).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
