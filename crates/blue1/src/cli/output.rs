//! Shared printing helpers.

use blue1::{Blue1Result, JsonError};
use serde::Serialize;

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Blue1Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to render command output: {e}")))?;
    println!("{}", json);
    Ok(())
}

/// Report an absent record and exit with a failure status.
///
/// The client folds "does not exist" and "could not be fetched" into one
/// absence; the log carries the difference.
pub fn missing(what: impl std::fmt::Display) -> ! {
    eprintln!("No {} found (see the log for upstream errors)", what);
    std::process::exit(1);
}
