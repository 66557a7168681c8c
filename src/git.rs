//! Git subprocess boundary.
//!
//! All repository operations delegate to the externally installed `git`
//! executable, invoked with explicit argument lists; nothing is ever passed
//! through a shell. A non-zero exit or a failed spawn is a recoverable
//! [`GitError`], reported to the user without crashing the process.

use tokio::process::Command;

use crate::constants;
use crate::errors::GitError;

/// Captured output of a finished git invocation.
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// The stream worth showing the user: stdout when present, else stderr
    /// (git writes progress and hints there even on success).
    pub fn message(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Runner for the local git executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    /// Invoke git with the given argument list and capture its output.
    pub async fn run(&self, args: &[&str]) -> Result<GitOutput, GitError> {
        let output = Command::new(constants::git::GIT_BIN)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::NotInstalled
                } else {
                    GitError::Spawn(e.to_string())
                }
            })?;

        let stdout = chomp(String::from_utf8_lossy(&output.stdout).into_owned());
        let stderr = chomp(String::from_utf8_lossy(&output.stderr).into_owned());

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                status: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(GitOutput { stdout, stderr })
    }

    /// Probe for a usable git binary.
    pub async fn is_installed(&self) -> bool {
        self.run(&["--version"]).await.is_ok()
    }

    /// `git clone <url>`. The url must already be normalized.
    pub async fn clone(&self, url: &str) -> Result<GitOutput, GitError> {
        self.run(&["clone", url]).await
    }

    /// `git status` in the current directory.
    pub async fn status(&self) -> Result<GitOutput, GitError> {
        self.run(&["status"]).await
    }

    /// Stage everything and commit. An empty message falls back to the
    /// default.
    pub async fn commit_all(&self, message: &str) -> Result<GitOutput, GitError> {
        let message = if message.trim().is_empty() {
            constants::git::DEFAULT_COMMIT_MESSAGE
        } else {
            message
        };

        self.run(&["add", "."]).await?;
        self.run(&["commit", "-m", message]).await
    }

    /// `git push` to the configured remote.
    pub async fn push(&self) -> Result<GitOutput, GitError> {
        self.run(&["push"]).await
    }
}

fn chomp(mut s: String) -> String {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
    s
}
