//! Input validation and normalization utilities.
//!
//! This module provides validation for account names and raw secrets, plus
//! the clone-target normalization the commander applies before shelling out
//! to git.

use anyhow::{Context, Result};
use regex::Regex;

use crate::constants;

/// Validate a GitHub account name.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty after trimming
/// - The name exceeds the maximum length
/// - The name contains characters other than alphanumerics and hyphens,
///   or starts/ends with a hyphen
pub fn validate_account(name: &str) -> Result<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        anyhow::bail!("Account name cannot be empty");
    }

    if trimmed.len() < constants::account::MIN_ACCOUNT_LENGTH {
        anyhow::bail!(
            "Account name must be at least {} character(s) long",
            constants::account::MIN_ACCOUNT_LENGTH
        );
    }

    if trimmed.len() > constants::account::MAX_ACCOUNT_LENGTH {
        anyhow::bail!(
            "Account name cannot exceed {} characters (got {})",
            constants::account::MAX_ACCOUNT_LENGTH,
            trimmed.len()
        );
    }

    let re = Regex::new(constants::account::VALID_ACCOUNT_PATTERN)
        .context("Failed to compile account name regex")?;

    if !re.is_match(trimmed) {
        anyhow::bail!(
            "Account name can only contain letters, numbers, and inner hyphens. Got: '{}'",
            trimmed
        );
    }

    Ok(())
}

/// Validate a raw secret entered during profile setup.
pub fn validate_secret(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        anyhow::bail!("Token cannot be empty");
    }
    Ok(())
}

/// Normalize a clone target to a full URL.
///
/// `owner/repo` shorthand is expanded to `https://github.com/owner/repo`;
/// anything already starting with `http` is passed through unchanged.
pub fn normalize_repo_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("{}{}", constants::git::GITHUB_URL_PREFIX, trimmed)
    }
}

/// Extract the repository name from a clone URL.
///
/// The trailing path segment with any `.git` suffix stripped.
pub fn repo_name_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .trim_end_matches(".git")
        .to_string()
}
