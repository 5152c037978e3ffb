//! Validate command implementation.

use super::read_input;
use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use serde_json::Value;
use skillmatrix_schema::validate;

/// Execute the validate command.
///
/// Prints the result either way; an invalid record is then reported as
/// [`CliError::InvalidRecord`] so the process exits non-zero.
pub fn execute_validate(args: ValidateArgs, formatter: &Formatter) -> Result<()> {
    let raw = read_input(args.file.as_deref())?;
    let candidate: Value = serde_json::from_str(&raw)?;

    let result = validate(&candidate);
    println!("{}", formatter.format_validation(&result)?);

    if result.valid {
        Ok(())
    } else {
        Err(CliError::InvalidRecord(result.errors.len()))
    }
}
