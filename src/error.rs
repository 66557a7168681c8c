//! Error formatting utilities.
//!
//! This module provides helper functions for formatting error chains
//! into human-readable messages.

use anyhow::Error;

/// Format an error and its source chain into a detailed error message.
///
/// Extracts the full error chain from an `anyhow::Error`, joining all
/// messages with " → " so a failed command reports its whole context on
/// one line instead of a backtrace.
///
/// # Example
///
/// ```
/// use anyhow::anyhow;
/// use github_commander::error::format_error_chain;
///
/// let err = anyhow!("connection refused")
///     .context("GET /user failed")
///     .context("whoami command failed");
/// let formatted = format_error_chain(&err);
/// // "whoami command failed → GET /user failed → connection refused"
/// ```
pub fn format_error_chain(error: &Error) -> String {
    let mut error_chain = vec![format!("{}", error)];
    let mut current = error.source();
    while let Some(err) = current {
        error_chain.push(format!("{}", err));
        current = err.source();
    }
    error_chain.join(" → ")
}
