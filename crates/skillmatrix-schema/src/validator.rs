//! Rule evaluation

use crate::rules::{Check, FieldRule, SKILL_MATRIX_RULES};
use crate::SchemaError;
use serde::Serialize;
use serde_json::{Map, Value};
use skillmatrix_domain::SkillMatrix;

/// Outcome of validating one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether every rule passed
    pub valid: bool,

    /// One message per failed rule, in rule order
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Evaluates a rule table against untyped JSON
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    rules: &'static [FieldRule],
}

impl Validator {
    /// Create a validator over an arbitrary rule table
    pub fn new(rules: &'static [FieldRule]) -> Self {
        Self { rules }
    }

    /// Validator for the skill matrix contract
    pub fn skill_matrix() -> Self {
        Self::new(SKILL_MATRIX_RULES)
    }

    /// Validate a candidate value
    ///
    /// A non-object candidate is reported once and then checked as an empty
    /// object, so every required field is listed as well.
    pub fn validate(&self, candidate: &Value) -> ValidationResult {
        let mut errors = Vec::new();
        let empty = Map::new();

        let fields = match candidate.as_object() {
            Some(fields) => fields,
            None => {
                errors.push("record must be a JSON object".to_string());
                &empty
            }
        };

        check_fields(self.rules, fields, "", &mut errors);
        ValidationResult::from_errors(errors)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::skill_matrix()
    }
}

fn check_fields(rules: &[FieldRule], fields: &Map<String, Value>, prefix: &str, errors: &mut Vec<String>) {
    for rule in rules {
        let path = if prefix.is_empty() {
            rule.field.to_string()
        } else {
            format!("{}.{}", prefix, rule.field)
        };

        match fields.get(rule.field) {
            None | Some(Value::Null) => {
                if rule.required {
                    errors.push(describe(&path, &rule.check));
                }
            }
            Some(value) => check_value(&path, &rule.check, value, errors),
        }
    }
}

fn check_value(path: &str, check: &Check, value: &Value, errors: &mut Vec<String>) {
    let ok = match check {
        Check::NonEmptyString => value.as_str().is_some_and(|s| !s.is_empty()),
        Check::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        Check::StringArray => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
        Check::Number => value.is_number(),
        Check::Object(nested) => match value.as_object() {
            Some(fields) => {
                check_fields(nested, fields, path, errors);
                true
            }
            None => false,
        },
    };

    if !ok {
        errors.push(describe(path, check));
    }
}

fn describe(path: &str, check: &Check) -> String {
    match check {
        Check::NonEmptyString => format!("{} must be a non-empty string", path),
        Check::OneOf(allowed) => format!("{} must be one of: {}", path, allowed.join(", ")),
        Check::StringArray => format!("{} must be an array of strings", path),
        Check::Number => format!("{} must be a number", path),
        Check::Object(_) => format!("{} must be an object", path),
    }
}

/// Validate a candidate against the skill matrix contract
pub fn validate(candidate: &Value) -> ValidationResult {
    Validator::skill_matrix().validate(candidate)
}

/// Validate an already-typed record through the same rules
pub fn validate_matrix(matrix: &SkillMatrix) -> ValidationResult {
    match serde_json::to_value(matrix) {
        Ok(value) => validate(&value),
        Err(e) => ValidationResult::from_errors(vec![format!("record could not be serialized: {}", e)]),
    }
}

/// Validate a candidate and convert it into the typed record
pub fn into_matrix(candidate: Value) -> Result<SkillMatrix, SchemaError> {
    let result = validate(&candidate);
    if !result.valid {
        return Err(SchemaError::Invalid(result.errors));
    }
    Ok(serde_json::from_value(candidate)?)
}
