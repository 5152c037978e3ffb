//! AI-assisted extraction with a single corrective retry

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use skillmatrix_domain::{SkillMatrix, TextGenerator};
use skillmatrix_schema::{into_matrix, Validator};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Where the extractor is in its retry budget
#[derive(Debug, Clone, PartialEq, Eq)]
enum Attempt {
    /// Primary prompt
    First,
    /// Corrective prompt carrying the previous attempt's validation messages
    Retry(Vec<String>),
}

impl Attempt {
    fn number(&self) -> u8 {
        match self {
            Attempt::First => 1,
            Attempt::Retry(_) => 2,
        }
    }
}

/// Delegates extraction to a text generator and validates what comes back
pub struct AiExtractor<G> {
    generator: G,
    validator: Validator,
    config: ExtractorConfig,
}

impl<G: TextGenerator> AiExtractor<G> {
    /// Create a new extractor around a generator
    pub fn new(generator: G, config: ExtractorConfig) -> Self {
        Self {
            generator,
            validator: Validator::skill_matrix(),
            config,
        }
    }

    /// The wrapped generator
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a validated skill matrix from a job description.
    ///
    /// At most two generation calls are made. Transport, timeout and parse
    /// failures end the run immediately; only a schema failure on the first
    /// attempt earns the corrective retry.
    pub async fn extract(&self, text: &str) -> Result<SkillMatrix, ExtractorError> {
        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.config.max_text_length));
        }

        info!("Starting AI extraction, text length {}", length);

        let prompts = PromptBuilder::new(text);
        let mut attempt = Attempt::First;

        loop {
            let prompt = match &attempt {
                Attempt::First => prompts.build(),
                Attempt::Retry(errors) => prompts.build_retry(errors),
            };
            debug!("Attempt {}: prompt length {} chars", attempt.number(), prompt.len());

            let response = self.call_generator(&prompt).await?;
            debug!("Attempt {}: response length {} chars", attempt.number(), response.len());

            let candidate = parse_llm_response(&response)?;
            let result = self.validator.validate(&candidate);

            if result.valid {
                info!("AI extraction succeeded on attempt {}", attempt.number());
                return Ok(into_matrix(candidate)?);
            }

            attempt = match attempt {
                Attempt::First => {
                    warn!(
                        "Generated record failed validation ({} errors), retrying once",
                        result.errors.len()
                    );
                    Attempt::Retry(result.errors)
                }
                Attempt::Retry(_) => {
                    warn!("Generated record still invalid after retry");
                    return Err(ExtractorError::Validation {
                        errors: result.errors,
                    });
                }
            };
        }
    }

    async fn call_generator(&self, prompt: &str) -> Result<String, ExtractorError> {
        let params = self.config.generation_params();

        timeout(self.config.call_timeout(), self.generator.generate(prompt, &params))
            .await
            .map_err(|_| ExtractorError::Timeout(self.config.call_timeout_secs))?
            .map_err(|e| ExtractorError::Transport(e.to_string()))
    }
}
