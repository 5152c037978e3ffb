//! Prompt construction for the AI-assisted extractor

use skillmatrix_schema::{RETRY_SCHEMA_DESCRIPTION, SCHEMA_DESCRIPTION};

/// Builds the primary and corrective prompts for one job description
pub struct PromptBuilder<'a> {
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Primary extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\nRequired JSON schema:\n");
        prompt.push_str(SCHEMA_DESCRIPTION);
        prompt.push_str("\n\nJob Description:\n");
        prompt.push_str(self.text);
        prompt.push_str("\n\n");
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }

    /// Corrective prompt listing what was wrong with the previous answer
    pub fn build_retry(&self, errors: &[String]) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!("The previous JSON was invalid: {}\n\n", errors.join(", ")));
        prompt.push_str("Please fix and return ONLY a valid JSON object matching this exact schema:\n");
        prompt.push_str(RETRY_SCHEMA_DESCRIPTION);
        prompt.push_str("\n\nOriginal data to parse:\n");
        prompt.push_str(self.text);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "You are a job description parser. Extract structured information \
from the following job description and return ONLY a valid JSON object with NO additional text, \
markdown formatting, or code blocks.

Rules:
- Use \"unknown\" for seniority when the posting gives no clear level
- Put every technology in exactly one skills category; use \"other\" for anything that fits none
- Omit \"salary\" entirely when the posting states no range
- Keep \"summary\" under 60 words";

const OUTPUT_FORMAT_REMINDER: &str = "Return ONLY the JSON object, nothing else:";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_text_and_schema() {
        let prompt = PromptBuilder::new("Senior Rust Engineer at Acme").build();
        assert!(prompt.contains("Senior Rust Engineer at Acme"));
        assert!(prompt.contains(SCHEMA_DESCRIPTION));
        assert!(prompt.contains("ONLY a valid JSON object"));
        assert!(prompt.ends_with(OUTPUT_FORMAT_REMINDER));
    }

    #[test]
    fn test_retry_prompt_embeds_errors_and_text() {
        let errors = vec![
            "title must be a non-empty string".to_string(),
            "seniority must be one of: junior, mid, senior, lead, unknown".to_string(),
        ];
        let prompt = PromptBuilder::new("Go developer wanted").build_retry(&errors);

        assert!(prompt.starts_with(
            "The previous JSON was invalid: title must be a non-empty string, seniority must be one of"
        ));
        assert!(prompt.contains(RETRY_SCHEMA_DESCRIPTION));
        assert!(prompt.ends_with("Original data to parse:\nGo developer wanted"));
    }

    #[test]
    fn test_prompts_differ() {
        let builder = PromptBuilder::new("text");
        assert_ne!(builder.build(), builder.build_retry(&[]));
    }
}
