//! Trait definitions for external interactions
//!
//! Infrastructure implementations live in other crates (`skillmatrix-llm`).

use async_trait::async_trait;

/// Sampling settings sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature; extraction wants this low
    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_output_tokens: 2048,
        }
    }
}

/// Trait for text-generation services
///
/// Implemented by the infrastructure layer (skillmatrix-llm). One call is one
/// request to the service; implementations must not retry on their own, the
/// caller owns the retry budget.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Error type for generation failures
    type Error: std::fmt::Display + Send;

    /// Generate text for a prompt and return the bare generated text
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, Self::Error>;
}
