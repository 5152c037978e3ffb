//! Declarative rule table for the skill matrix

/// Structural check applied to a single field
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// A string with at least one character
    NonEmptyString,
    /// A string equal to one of the listed values
    OneOf(&'static [&'static str]),
    /// An array whose every element is a string
    StringArray,
    /// Any JSON number
    Number,
    /// An object whose fields satisfy the nested rules
    Object(&'static [FieldRule]),
}

/// Rule binding a field name to a check
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name within the enclosing object
    pub field: &'static str,
    /// Whether a missing (or `null`) field is an error
    pub required: bool,
    /// Check applied when the field is present
    pub check: Check,
}

impl FieldRule {
    /// Rule for a field that must be present
    pub const fn required(field: &'static str, check: Check) -> Self {
        Self { field, required: true, check }
    }

    /// Rule for a field that is checked only when present
    pub const fn optional(field: &'static str, check: Check) -> Self {
        Self { field, required: false, check }
    }
}

/// Wire names of the seniority levels
pub const SENIORITY_LEVELS: &[&str] = &["junior", "mid", "senior", "lead", "unknown"];

/// Wire names of the supported currencies
pub const CURRENCIES: &[&str] = &["USD", "EUR", "PLN", "GBP"];

const SKILL_RULES: &[FieldRule] = &[
    FieldRule::required("frontend", Check::StringArray),
    FieldRule::required("backend", Check::StringArray),
    FieldRule::required("devops", Check::StringArray),
    FieldRule::required("web3", Check::StringArray),
    FieldRule::required("other", Check::StringArray),
];

const SALARY_RULES: &[FieldRule] = &[
    FieldRule::required("currency", Check::OneOf(CURRENCIES)),
    FieldRule::optional("min", Check::Number),
    FieldRule::optional("max", Check::Number),
];

/// Top-level rules of a skill matrix, in reporting order
pub static SKILL_MATRIX_RULES: &[FieldRule] = &[
    FieldRule::required("title", Check::NonEmptyString),
    FieldRule::required("seniority", Check::OneOf(SENIORITY_LEVELS)),
    FieldRule::required("skills", Check::Object(SKILL_RULES)),
    FieldRule::required("mustHave", Check::StringArray),
    FieldRule::required("niceToHave", Check::StringArray),
    FieldRule::optional("salary", Check::Object(SALARY_RULES)),
    FieldRule::required("summary", Check::NonEmptyString),
];
