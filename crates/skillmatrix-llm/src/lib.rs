//! Skill Matrix Generation Providers
//!
//! Implementations of the `TextGenerator` trait from `skillmatrix-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: scripted, offline provider for tests and dry runs
//! - `GeminiProvider`: Google Generative Language API over HTTP
//!
//! # Examples
//!
//! ```
//! use skillmatrix_llm::MockProvider;
//! use skillmatrix_domain::{GenerationParams, TextGenerator};
//!
//! # tokio_test_block_on(async {
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt", &GenerationParams::default()).await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use skillmatrix_domain::{GenerationParams, TextGenerator};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during generation calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network failure, timeout or unreachable endpoint
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service answered with a non-success status
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// Response envelope could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Envelope decoded but carried no generated text
    #[error("LLM returned empty content")]
    EmptyContent,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum Scripted {
    Text(String),
    Error(String),
}

#[derive(Debug, Default)]
struct MockState {
    queue: VecDeque<Scripted>,
    prompts: Vec<String>,
}

/// Mock provider for deterministic testing
///
/// Returns scripted responses in order without any network calls; once the
/// script is exhausted every call gets the default response. Every prompt is
/// recorded so tests can assert on what was sent.
///
/// # Examples
///
/// ```
/// use skillmatrix_llm::MockProvider;
///
/// let provider = MockProvider::new("fallback");
/// provider.push_response("first");
/// provider.push_error("service down");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Create a provider that answers with `responses` in order
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::default();
        for response in responses {
            provider.push_response(response);
        }
        provider
    }

    /// Queue a successful response
    pub fn push_response(&self, response: impl Into<String>) {
        self.lock().queue.push_back(Scripted::Text(response.into()));
    }

    /// Queue a failing call
    pub fn push_error(&self, message: impl Into<String>) {
        self.lock().queue.push_back(Scripted::Error(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.lock().prompts.len()
    }

    /// Every prompt received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Forget recorded prompts and any remaining script
    pub fn reset(&self) {
        let mut state = self.lock();
        state.queue.clear();
        state.prompts.clear();
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str, _params: &GenerationParams) -> Result<String, Self::Error> {
        let mut state = self.lock();
        state.prompts.push(prompt.to_string());

        match state.queue.pop_front() {
            Some(Scripted::Text(text)) => Ok(text),
            Some(Scripted::Error(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}
