pub mod insights;
pub mod recommend;
pub mod saved;
pub mod survey;

use anyhow::{Context, Result};
use serde::Serialize;

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output as JSON")?;
    println!("{}", json);
    Ok(())
}
