//! Schema error types

use thiserror::Error;

/// Errors raised when a candidate cannot become a `SkillMatrix`
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Candidate failed one or more structural rules
    #[error("Schema validation failed: {}", .0.join(", "))]
    Invalid(Vec<String>),

    /// Candidate passed the rules but could not be converted to the typed record
    #[error("Conversion error: {0}")]
    Conversion(#[from] serde_json::Error),
}
