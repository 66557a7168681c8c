//! Profile file location resolution.
//!
//! This module locates the persisted profile following the XDG Base
//! Directory Specification, with an environment-variable override for tests
//! and unusual setups.

use std::env;
use std::path::PathBuf;

use crate::constants;

/// Find the profile file.
/// Priority:
/// 1. GH_COMMANDER_PROFILE from environment (if set)
/// 2. XDG_CONFIG_HOME/github-commander/profile.toml (if XDG_CONFIG_HOME is set)
/// 3. ~/.config/github-commander/profile.toml (default XDG location)
///
/// The returned path is where the profile lives or should be created; it is
/// not required to exist yet.
pub fn profile_path() -> PathBuf {
    if let Ok(override_path) = env::var(constants::profile::PROFILE_PATH_ENV) {
        return PathBuf::from(override_path);
    }

    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config_home)
            .join(constants::profile::CONFIG_DIR_NAME)
            .join(constants::profile::PROFILE_FILE_NAME);
    }

    if let Some(home) = dirs::home_dir() {
        return home
            .join(".config")
            .join(constants::profile::CONFIG_DIR_NAME)
            .join(constants::profile::PROFILE_FILE_NAME);
    }

    // Last resort: current directory
    PathBuf::from(constants::profile::PROFILE_FILE_NAME)
}

/// Find and load a .env file so GITHUB_TOKEN and overrides can come from disk.
/// Priority:
/// 1. Current directory/.env
/// 2. ~/.config/github-commander/.env (default XDG location)
/// 3. XDG_CONFIG_HOME/github-commander/.env (if XDG_CONFIG_HOME is set)
pub fn load_env_file() {
    let current_dir_env = PathBuf::from(".env");
    if current_dir_env.exists() {
        let _ = dotenv::from_path(&current_dir_env);
        return;
    }

    if let Some(home) = dirs::home_dir() {
        let default_xdg_env = home
            .join(".config")
            .join(constants::profile::CONFIG_DIR_NAME)
            .join(".env");
        if default_xdg_env.exists() {
            let _ = dotenv::from_path(&default_xdg_env);
            return;
        }
    }

    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        let xdg_env_path = PathBuf::from(xdg_config_home)
            .join(constants::profile::CONFIG_DIR_NAME)
            .join(".env");
        if xdg_env_path.exists() {
            let _ = dotenv::from_path(&xdg_env_path);
            return;
        }
    }

    // Fallback: dotenv default behavior
    let _ = dotenv::dotenv();
}

/// Resolve a usable API token from the environment, if any.
///
/// The persisted profile only stores an obfuscated hash, so a real token can
/// only come from GITHUB_TOKEN (possibly via a .env file).
pub fn env_token() -> Option<String> {
    env::var(constants::profile::TOKEN_ENV)
        .ok()
        .filter(|t| !t.trim().is_empty())
}
