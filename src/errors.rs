use thiserror::Error;

/// Errors that can occur when talking to the GitHub API.
///
/// Every variant is recoverable: the request façade reports it and yields an
/// empty result rather than aborting the process.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("GitHub API error (status {status_code}): {message}")]
    Status {
        status_code: u16,
        message: String,
        documentation_url: Option<String>,
    },
    #[error("HTTP transport error: {0}")]
    Transport(String),
    #[error("URI error: {0}")]
    Uri(String),
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

/// Errors that can occur when working with the persisted profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    Read(String),
    #[error("Failed to parse profile file: {0}")]
    Parse(String),
    #[error("Failed to write profile file: {0}")]
    Write(String),
}

/// Errors that can occur when invoking the git executable.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git: {0}")]
    Spawn(String),
    #[error("git {command} exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },
    #[error("git executable not found on PATH")]
    NotInstalled,
}

impl From<octocrab::Error> for ApiError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => ApiError::Status {
                status_code: source.status_code.as_u16(),
                message: source.message,
                documentation_url: source.documentation_url,
            },
            octocrab::Error::Http { source, .. } => ApiError::Transport(source.to_string()),
            octocrab::Error::Uri { source, .. } => ApiError::Uri(source.to_string()),
            octocrab::Error::Serde { source, .. } => ApiError::Decode(source.to_string()),
            octocrab::Error::Json { source, .. } => ApiError::Decode(source.to_string()),
            _ => ApiError::Transport(err.to_string()),
        }
    }
}

impl ApiError {
    /// True when the failure came back from the server as an HTTP status,
    /// as opposed to never reaching it.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}
