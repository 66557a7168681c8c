//! Interactive terminal prompts.
//!
//! All terminal input goes through this module so the rest of the crate can
//! be driven by the [`crate::app_deps::PromptInterface`] seam in tests.

use anyhow::Result;
use colored::*;
use dialoguer::{Confirm, Input, Password};

/// Ask for the GitHub account name during first-run setup.
pub fn prompt_account() -> Result<String> {
    let account: String = Input::new()
        .with_prompt("GitHub account name")
        .interact_text()?;
    Ok(account)
}

/// Ask for the raw token during first-run setup. Input is hidden.
///
/// Only a derived hash of this value is ever persisted; the raw token is
/// dropped as soon as setup finishes.
pub fn prompt_secret() -> Result<String> {
    let secret: String = Password::new()
        .with_prompt("Personal access token")
        .interact()?;
    Ok(secret)
}

/// Ask for a commit message. Empty input is allowed; the caller substitutes
/// the default.
pub fn prompt_commit_message() -> Result<String> {
    let message: String = Input::new()
        .with_prompt("Commit message")
        .allow_empty(true)
        .interact_text()?;
    Ok(message)
}

/// Ask whether to push after a successful commit.
pub fn confirm_push() -> Result<bool> {
    let push = Confirm::new()
        .with_prompt("Push to GitHub?")
        .default(false)
        .interact()?;
    Ok(push)
}

/// Banner shown when setup starts.
pub fn setup_banner() {
    println!("{}", "⚙ First-run setup: creating your profile".bold());
    println!(
        "{}",
        "The token is stored as a one-way hash, not in the clear.".dimmed()
    );
}
