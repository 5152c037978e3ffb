//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(path, formatter),
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Print the effective configuration.
fn show_config(path: &Path, formatter: &Formatter) -> Result<()> {
    let config = Config::load_from(path)?;

    if path.exists() {
        println!("{}", formatter.info(&format!("Config file: {}", path.display())));
    } else {
        println!("{}", formatter.info(&format!("No config file at {}, showing defaults", path.display())));
    }
    println!("{}", config.to_toml()?);

    Ok(())
}

/// Write the default configuration.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!("{}", formatter.success(&format!("Wrote {}", path.display())));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);

        init_config(&path, false, &formatter).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        assert!(matches!(init_config(&path, false, &formatter), Err(CliError::Config(_))));
        assert!(init_config(&path, true, &formatter).is_ok());
    }

    #[test]
    fn test_show_without_file() {
        let dir = TempDir::new().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(show_config(&dir.path().join("missing.toml"), &formatter).is_ok());
    }
}
