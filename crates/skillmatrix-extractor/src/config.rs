//! Configuration for the AI-assisted extractor

use serde::{Deserialize, Serialize};
use skillmatrix_domain::GenerationParams;
use std::time::Duration;

/// Configuration for the AI-assisted extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sampling temperature sent to the generation service
    pub temperature: f32,

    /// Maximum generated tokens per call
    pub max_output_tokens: u32,

    /// Maximum time for a single generation call (seconds)
    pub call_timeout_secs: u64,

    /// Maximum input text length (characters)
    pub max_text_length: usize,
}

impl ExtractorConfig {
    /// Get the call timeout as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Generation parameters for every call
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be within 0.0..=2.0".to_string());
        }
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if self.call_timeout_secs == 0 {
            return Err("call_timeout_secs must be greater than 0".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Low temperature, bounded output
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_output_tokens: 2048,
            call_timeout_secs: 60,
            max_text_length: 50_000,
        }
    }
}
