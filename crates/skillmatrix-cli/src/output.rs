//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use skillmatrix_extractor::Extraction;
use skillmatrix_schema::ValidationResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Envelope printed by `analyze` in JSON mode.
#[derive(Serialize)]
struct AnalyzeResponse<'a> {
    success: bool,
    #[serde(flatten)]
    extraction: &'a Extraction,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction result.
    pub fn format_extraction(&self, extraction: &Extraction) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_extraction_json(extraction),
            OutputFormat::Table => Ok(self.format_extraction_table(extraction)),
        }
    }

    fn format_extraction_json(&self, extraction: &Extraction) -> Result<String> {
        let response = AnalyzeResponse {
            success: true,
            extraction,
        };
        Ok(serde_json::to_string_pretty(&response)?)
    }

    fn format_extraction_table(&self, extraction: &Extraction) -> String {
        let matrix = &extraction.data;

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Title", matrix.title.as_str()]);
        builder.push_record(["Seniority", matrix.seniority.as_str()]);
        builder.push_record(["Method", extraction.method.as_str()]);

        for (category, skills) in matrix.skills.iter() {
            builder.push_record([category.as_str().to_string(), join_or_dash(skills, ", ")]);
        }

        builder.push_record(["Must have".to_string(), join_or_dash(&matrix.must_have, "\n")]);
        builder.push_record(["Nice to have".to_string(), join_or_dash(&matrix.nice_to_have, "\n")]);

        let salary = matrix
            .salary
            .as_ref()
            .map(|s| s.describe())
            .unwrap_or_else(|| "-".to_string());
        builder.push_record(["Salary".to_string(), salary]);
        builder.push_record(["Summary", matrix.summary.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a validation result.
    pub fn format_validation(&self, result: &ValidationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => {
                if result.valid {
                    return Ok(self.success("Record is valid"));
                }
                let lines: Vec<String> = result.errors.iter().map(|e| self.error(e)).collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_or_dash(items: &[String], separator: &str) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatrix_domain::{Currency, Salary, Seniority, SkillMatrix, Skills};
    use skillmatrix_extractor::ExtractionMethod;

    fn create_test_extraction() -> Extraction {
        Extraction {
            data: SkillMatrix {
                title: "Senior Rust Engineer".to_string(),
                seniority: Seniority::Senior,
                skills: Skills {
                    backend: vec!["rust".to_string(), "postgresql".to_string()],
                    devops: vec!["docker".to_string()],
                    ..Default::default()
                },
                must_have: vec!["Tokio".to_string()],
                nice_to_have: vec![],
                salary: Some(Salary::range(Currency::EUR, 70000.0, 90000.0)),
                summary: "Senior-level Senior Rust Engineer position.".to_string(),
            },
            method: ExtractionMethod::Ai,
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_extraction(&create_test_extraction()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["method"], "ai");
        assert_eq!(value["data"]["seniority"], "senior");
        assert_eq!(value["data"]["mustHave"][0], "Tokio");
        assert_eq!(value["data"]["salary"]["currency"], "EUR");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_extraction(&create_test_extraction()).unwrap();
        assert!(output.contains("Senior Rust Engineer"));
        assert!(output.contains("rust, postgresql"));
        assert!(output.contains("EUR 70000-90000"));
        assert!(output.contains("Nice to have"));
    }

    #[test]
    fn test_validation_table_lists_errors() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = ValidationResult {
            valid: false,
            errors: vec!["title must be a non-empty string".to_string()],
        };
        let output = formatter.format_validation(&result).unwrap();
        assert_eq!(output, "✗ title must be a non-empty string");
    }

    #[test]
    fn test_validation_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let result = ValidationResult {
            valid: true,
            errors: vec![],
        };
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_validation(&result).unwrap()).unwrap();
        assert_eq!(value["valid"], true);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
