//! Command implementations.

pub mod analyze;
pub mod config;
pub mod validate;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::validate::execute_validate;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a file, or all of stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
