//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error, including AI requested without a credential
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extractor construction error
    #[error("Extractor error: {0}")]
    Extractor(#[from] skillmatrix_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record checked by `validate` did not conform
    #[error("Record is invalid ({0} error(s))")]
    InvalidRecord(usize),
}
