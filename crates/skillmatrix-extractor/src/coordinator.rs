//! Strategy selection between the AI and heuristic extractors

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::AiExtractor;
use serde::{Deserialize, Serialize};
use skillmatrix_domain::{SkillMatrix, TextGenerator};
use skillmatrix_heuristic::heuristic_extract;
use skillmatrix_llm::GeminiProvider;
use skillmatrix_schema::validate_matrix;
use std::fmt;
use tracing::{error, info, warn};

/// Which path produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Validated output of the generation service
    Ai,
    /// Keyword and pattern matching, either requested or as a fallback
    Heuristic,
}

impl ExtractionMethod {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::Ai => "ai",
            ExtractionMethod::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record together with the method that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// The extracted record
    pub data: SkillMatrix,

    /// Path that produced `data`
    pub method: ExtractionMethod,
}

/// Builds a generator from a caller-supplied credential
pub trait GeneratorFactory: Send + Sync {
    /// Generator produced by this factory
    type Generator: TextGenerator;

    /// Build a generator for one extraction
    fn build(&self, credential: &str, config: &ExtractorConfig) -> Result<Self::Generator, String>;
}

impl<F, G> GeneratorFactory for F
where
    F: Fn(&str) -> Result<G, String> + Send + Sync,
    G: TextGenerator,
{
    type Generator = G;

    fn build(&self, credential: &str, _config: &ExtractorConfig) -> Result<G, String> {
        self(credential)
    }
}

/// Builds [`GeminiProvider`]s against a fixed endpoint and model
#[derive(Debug, Clone)]
pub struct GeminiFactory {
    endpoint: String,
    model: String,
}

impl GeminiFactory {
    /// Factory for the given endpoint and model
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }
}

impl Default for GeminiFactory {
    fn default() -> Self {
        Self::new(
            skillmatrix_llm::gemini::DEFAULT_ENDPOINT,
            skillmatrix_llm::gemini::DEFAULT_MODEL,
        )
    }
}

impl GeneratorFactory for GeminiFactory {
    type Generator = GeminiProvider;

    fn build(&self, credential: &str, config: &ExtractorConfig) -> Result<GeminiProvider, String> {
        let provider = GeminiProvider::new(credential).map_err(|e| e.to_string())?;
        Ok(provider
            .with_endpoint(self.endpoint.clone())
            .with_model(self.model.clone())
            .with_timeout(config.call_timeout()))
    }
}

/// Chooses an extraction path and falls back to the heuristic on any AI failure
///
/// [`Coordinator::extract`] never fails: whatever happens on the AI path, the
/// caller gets a record and the method that produced it.
pub struct Coordinator<F> {
    factory: F,
    config: ExtractorConfig,
}

impl<F: GeneratorFactory> Coordinator<F> {
    /// Create a coordinator
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Config`] when `config` fails
    /// [`ExtractorConfig::validate`].
    pub fn new(factory: F, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { factory, config })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a record, using the AI path only when asked and a credential is present
    pub async fn extract(&self, text: &str, use_ai: bool, credential: Option<&str>) -> Extraction {
        let credential = match (use_ai, credential) {
            (true, Some(credential)) => credential,
            (true, None) => {
                info!("AI extraction requested without a credential, using heuristic");
                return self.heuristic(text);
            }
            (false, _) => return self.heuristic(text),
        };

        match self.extract_with_ai(text, credential).await {
            Ok(data) => Extraction {
                data,
                method: ExtractionMethod::Ai,
            },
            Err(e) => {
                warn!("AI extraction failed, falling back to heuristic: {}", e);
                self.heuristic(text)
            }
        }
    }

    async fn extract_with_ai(&self, text: &str, credential: &str) -> Result<SkillMatrix, ExtractorError> {
        let generator = self
            .factory
            .build(credential, &self.config)
            .map_err(ExtractorError::Config)?;

        AiExtractor::new(generator, self.config.clone()).extract(text).await
    }

    fn heuristic(&self, text: &str) -> Extraction {
        let data = heuristic_extract(text);

        let check = validate_matrix(&data);
        if !check.valid {
            error!("Heuristic record failed validation: {}", check.errors.join(", "));
        }

        Extraction {
            data,
            method: ExtractionMethod::Heuristic,
        }
    }
}
