//! Skill Matrix CLI - Extract structured skill matrices from job descriptions.

use clap::Parser;
use skillmatrix_cli::commands;
use skillmatrix_cli::cli::CliFormat;
use skillmatrix_cli::config::Settings;
use skillmatrix_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so stdout stays machine-readable)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> skillmatrix_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    match cli.command {
        // Config management works even when the current file is broken
        Command::Config(args) => {
            let formatter = build_formatter(cli.format, cli.no_color, &Settings::default());
            commands::execute_config(args, &config_path, &formatter)
        }
        Command::Analyze(args) => {
            let config = load_config(&config_path)?;
            let formatter = build_formatter(cli.format, cli.no_color, &config.settings);
            commands::execute_analyze(args, &config, &formatter).await
        }
        Command::Validate(args) => {
            let config = load_config(&config_path)?;
            let formatter = build_formatter(cli.format, cli.no_color, &config.settings);
            commands::execute_validate(args, &formatter)
        }
    }
}

fn load_config(path: &Path) -> skillmatrix_cli::Result<Config> {
    let config = Config::load_from(path)?;
    config.validate()?;
    Ok(config)
}

/// Command-line flags win over the configured settings
fn build_formatter(format: Option<CliFormat>, no_color: bool, settings: &Settings) -> Formatter {
    let format = format.map(Into::into).unwrap_or(settings.format);
    Formatter::new(format, !no_color && settings.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatrix_cli::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            color: true,
            format: OutputFormat::Table,
        };
        let formatter = build_formatter(Some(CliFormat::Json), true, &settings);
        assert_eq!(formatter.success("ok"), "✓ ok");
    }

    #[tokio::test]
    async fn test_config_init_ignores_broken_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[provider\nmodel = ").unwrap();
        let path_arg = path.to_str().unwrap();

        let broken = Cli::parse_from(["skillmatrix", "--config", path_arg, "validate", path_arg]);
        assert!(run(broken).await.is_err());

        let init = Cli::parse_from(["skillmatrix", "--config", path_arg, "config", "init", "--force"]);
        assert!(run(init).await.is_ok());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
