//! Analyze command implementation.

use super::read_input;
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use skillmatrix_extractor::{Coordinator, GeminiFactory};
use tracing::info;

/// Shortest job description accepted.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    check_description(&text)?;

    let credential = resolve_credential(args.ai, args.api_key.as_deref())?;

    let model = args.model.unwrap_or_else(|| config.provider.model.clone());
    let factory = GeminiFactory::new(config.provider.endpoint.clone(), model);
    let coordinator = Coordinator::new(factory, config.extractor.clone())?;

    let extraction = coordinator.extract(&text, args.ai, credential).await;
    info!("Extraction finished using the {} method", extraction.method);

    println!("{}", formatter.format_extraction(&extraction)?);

    Ok(())
}

/// Reject descriptions too short to analyze.
fn check_description(text: &str) -> Result<()> {
    if text.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(CliError::InvalidInput(format!(
            "Job description must be at least {} characters long",
            MIN_DESCRIPTION_CHARS
        )));
    }
    Ok(())
}

/// A blank key counts as absent; AI without a key is a configuration error.
fn resolve_credential(use_ai: bool, api_key: Option<&str>) -> Result<Option<&str>> {
    let credential = api_key.map(str::trim).filter(|key| !key.is_empty());

    if use_ai && credential.is_none() {
        return Err(CliError::Config(
            "AI extraction requested but no API key provided (use --api-key or GEMINI_API_KEY)".to_string(),
        ));
    }

    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_short_description_rejected() {
        assert!(matches!(check_description("Rust dev"), Err(CliError::InvalidInput(_))));
        assert!(matches!(check_description("   Rust   \n"), Err(CliError::InvalidInput(_))));
        assert!(check_description("Rust developer").is_ok());
    }

    #[test]
    fn test_ai_without_key_is_config_error() {
        assert!(matches!(resolve_credential(true, None), Err(CliError::Config(_))));
        assert!(matches!(resolve_credential(true, Some("  ")), Err(CliError::Config(_))));
    }

    #[test]
    fn test_credential_resolution() {
        assert_eq!(resolve_credential(true, Some(" key ")).unwrap(), Some("key"));
        assert_eq!(resolve_credential(false, None).unwrap(), None);
        assert_eq!(resolve_credential(false, Some("key")).unwrap(), Some("key"));
    }

    #[tokio::test]
    async fn test_invalid_extractor_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posting.txt");
        std::fs::write(&path, "Senior Rust Engineer\nRequirements: Tokio").unwrap();

        let mut config = Config::default();
        config.extractor.call_timeout_secs = 0;
        let args = AnalyzeArgs {
            file: Some(path),
            ai: false,
            api_key: None,
            model: None,
        };
        let formatter = Formatter::new(OutputFormat::Json, false);

        let result = execute_analyze(args, &config, &formatter).await;
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }
}
