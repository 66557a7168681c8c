//! Application constants for the GitHub API, profile storage, and git.
//!
//! This module contains all constant values used throughout the application,
//! including the API base URL, token obfuscation parameters, and profile
//! file locations.

/// GitHub API constants.
pub mod api {
    /// Base URL for the GitHub REST API.
    pub const BASE_URL: &str = "https://api.github.com";

    /// Path for the authenticated user endpoint.
    pub const USER_PATH: &str = "/user";

    /// Path for repository search.
    pub const SEARCH_REPOS_PATH: &str = "/search/repositories";
}

/// Token obfuscation constants.
pub mod obfuscation {
    /// Fixed salt appended to the raw secret before hashing.
    pub const SALT: &str = "github_termux_salt_2024";

    /// Length of the stored obfuscated token (base64 characters).
    pub const TOKEN_HASH_LEN: usize = 32;
}

/// Profile storage constants.
pub mod profile {
    /// Directory under the config root holding the profile.
    pub const CONFIG_DIR_NAME: &str = "github-commander";

    /// Profile file name.
    pub const PROFILE_FILE_NAME: &str = "profile.toml";

    /// Environment variable overriding the profile file location.
    pub const PROFILE_PATH_ENV: &str = "GH_COMMANDER_PROFILE";

    /// Environment variable carrying a usable API token.
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
}

/// Git subprocess constants.
pub mod git {
    /// Name of the git executable resolved from PATH.
    pub const GIT_BIN: &str = "git";

    /// Commit message used when the user provides none.
    pub const DEFAULT_COMMIT_MESSAGE: &str = "Update from Termux";

    /// Prefix expanded in front of `owner/repo` shorthand clone targets.
    pub const GITHUB_URL_PREFIX: &str = "https://github.com/";
}

/// Account name validation constants.
pub mod account {
    /// Maximum length for a GitHub account name.
    pub const MAX_ACCOUNT_LENGTH: usize = 39;

    /// Minimum length for a GitHub account name.
    pub const MIN_ACCOUNT_LENGTH: usize = 1;

    /// Valid account name shape: alphanumeric and inner hyphens only.
    pub const VALID_ACCOUNT_PATTERN: &str = r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?$";
}
