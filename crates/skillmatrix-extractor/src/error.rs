//! Error types for the extractors

use skillmatrix_schema::SchemaError;
use thiserror::Error;

/// Terminal failure of the AI-assisted extraction path
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Generation service call failed (request error, non-2xx, empty text)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Generation call exceeded the configured timeout
    #[error("Generation call timed out after {0}s")]
    Timeout(u64),

    /// Cleaned service output was not valid JSON
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// Output still failed the schema after the corrective retry
    #[error("Schema validation failed: {}", errors.join(", "))]
    Validation {
        /// Field-level messages from the last attempt
        errors: Vec<String>,
    },

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Parse(e.to_string())
    }
}

impl From<SchemaError> for ExtractorError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::Invalid(errors) => ExtractorError::Validation { errors },
            SchemaError::Conversion(e) => ExtractorError::Parse(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_fields() {
        let err = ExtractorError::Validation {
            errors: vec![
                "title must be a non-empty string".to_string(),
                "skills.web3 must be an array of strings".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Schema validation failed: title must be a non-empty string, skills.web3 must be an array of strings"
        );
    }

    #[test]
    fn test_from_serde_error_is_parse() {
        let err: ExtractorError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ExtractorError::Parse(_)));
    }

    #[test]
    fn test_from_schema_error_keeps_messages() {
        let err: ExtractorError = SchemaError::Invalid(vec!["summary must be a non-empty string".to_string()]).into();
        match err {
            ExtractorError::Validation { errors } => {
                assert_eq!(errors, vec!["summary must be a non-empty string".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
