//! Parse generation output into an untyped candidate record

use crate::error::ExtractorError;
use serde_json::Value;

/// Strip code fences and parse the remaining text as JSON.
///
/// Only syntax is checked here; structure is the validator's job.
pub fn parse_llm_response(response: &str) -> Result<Value, ExtractorError> {
    let json_str = strip_code_fences(response);
    serde_json::from_str(json_str)
        .map_err(|e| ExtractorError::Parse(format!("{} (response started with {:?})", e, preview(json_str))))
}

/// Remove a surrounding ```json ... ``` or ``` ... ``` wrapper
pub fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(opened) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop an info string such as `json` on the opening fence line
    let body = match opened.find('\n') {
        Some(newline) if opened[..newline].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
            &opened[newline + 1..]
        }
        _ => opened.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

fn preview(text: &str) -> String {
    text.chars().take(40).collect()
}
