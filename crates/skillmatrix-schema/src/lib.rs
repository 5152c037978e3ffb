//! Skill Matrix Schema
//!
//! The single structural contract every extraction path must satisfy.
//!
//! The schema is a declarative rule table ([`SKILL_MATRIX_RULES`]) evaluated
//! by one [`Validator`]. The AI path runs untrusted JSON through it before
//! conversion; the heuristic path runs its typed output through the same
//! rules, so both paths enforce exactly the same contract.
//!
//! # Examples
//!
//! ```
//! use skillmatrix_schema::Validator;
//! use serde_json::json;
//!
//! let result = Validator::skill_matrix().validate(&json!({ "title": "" }));
//! assert!(!result.valid);
//! assert!(result.errors.iter().any(|e| e.starts_with("title")));
//! ```

#![warn(missing_docs)]

mod description;
mod error;
mod rules;
mod validator;

pub use description::{RETRY_SCHEMA_DESCRIPTION, SCHEMA_DESCRIPTION};
pub use error::SchemaError;
pub use rules::{Check, FieldRule, SKILL_MATRIX_RULES};
pub use validator::{into_matrix, validate, validate_matrix, ValidationResult, Validator};
