//! Profile persistence and token obfuscation.
//!
//! This module handles loading, creating, and saving the local user profile:
//! the account name, the obfuscated token, a creation timestamp, and the
//! notifications feature flag. The profile is stored as TOML at the path
//! resolved by [`crate::paths::profile_path`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::app_deps::PromptInterface;
use crate::constants;
use crate::errors::ProfileError;

/// Persisted local user identity record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// GitHub account name.
    pub account: String,
    /// Obfuscated token: a one-way hash, NOT a usable credential.
    pub token_hash: String,
    /// Profile creation timestamp, RFC 3339.
    pub created_at: String,
    /// Whether platform notifications are enabled. Persisted only;
    /// delivery is handled outside this tool.
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_notifications() -> bool {
    true
}

/// Derive the stored form of a raw token.
///
/// SHA-256 over the raw secret concatenated with a fixed salt, base64
/// encoded and truncated to 32 characters. Deterministic and pure: the same
/// input always produces the same output. The derivation is one-way; the raw
/// token cannot be recovered from it, and the result is not equivalent to it
/// for authentication. See DESIGN.md on why it is nevertheless what gets
/// stored.
pub fn obfuscate_secret(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hasher.update(constants::obfuscation::SALT.as_bytes());
    let digest = hasher.finalize();

    let mut encoded = general_purpose::STANDARD.encode(digest);
    encoded.truncate(constants::obfuscation::TOKEN_HASH_LEN);
    encoded
}

impl Profile {
    /// Build a new profile from setup answers. Pure: no prompting, no I/O.
    pub fn from_setup(account: String, raw_secret: &str) -> Self {
        Self {
            account,
            token_hash: obfuscate_secret(raw_secret),
            created_at: Utc::now().to_rfc3339(),
            notifications: true,
        }
    }

    /// Parse a profile from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content =
            fs::read_to_string(path).map_err(|e| ProfileError::Read(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    /// Write the profile to a TOML file, creating the parent directory if
    /// absent (idempotent).
    pub fn save_to(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ProfileError::Write(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ProfileError::Write(e.to_string()))?;
        fs::write(path, content).map_err(|e| ProfileError::Write(e.to_string()))
    }

    /// Load the profile at `path`, falling back to interactive creation when
    /// the file is missing or unreadable.
    ///
    /// Any read or parse failure routes to the creation path; loading never
    /// aborts the process.
    pub fn load_or_create(path: &Path, prompter: &dyn PromptInterface) -> Result<Self> {
        match Self::from_file(path) {
            Ok(profile) => Ok(profile),
            Err(_) => Self::create(path, prompter),
        }
    }

    /// Run the interactive setup: prompt for account and token, derive the
    /// obfuscated token, persist, and return the new profile.
    pub fn create(path: &Path, prompter: &dyn PromptInterface) -> Result<Self> {
        let account = prompter.prompt_account()?;
        crate::validation::validate_account(&account)?;

        let raw_secret = prompter.prompt_secret()?;
        crate::validation::validate_secret(&raw_secret)?;

        let profile = Self::from_setup(account.trim().to_string(), &raw_secret);
        profile
            .save_to(path)
            .with_context(|| format!("Failed to save profile to {}", path.display()))?;

        Ok(profile)
    }

    /// The token sent on API requests.
    ///
    /// A real GITHUB_TOKEN from the environment wins; otherwise the stored
    /// hash is sent as-is, even though the hash cannot actually
    /// authenticate. See DESIGN.md.
    pub fn api_token(&self) -> String {
        crate::paths::env_token().unwrap_or_else(|| self.token_hash.clone())
    }
}
