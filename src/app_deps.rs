use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::git;
use crate::github::{self, JsonObject, Method};

#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> JsonObject;
    async fn current_user(&self) -> JsonObject;
    async fn search_repositories(&self, query: &str) -> JsonObject;
}

pub struct RealGitHubApi {
    inner: github::GitHubClient,
}

impl RealGitHubApi {
    pub fn new(token: String) -> Result<Self> {
        Ok(Self {
            inner: github::GitHubClient::new(token)?,
        })
    }
}

#[async_trait]
impl GitHubApi for RealGitHubApi {
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> JsonObject {
        self.inner.request(method, path, body).await
    }

    async fn current_user(&self) -> JsonObject {
        self.inner.current_user().await
    }

    async fn search_repositories(&self, query: &str) -> JsonObject {
        self.inner.search_repositories(query).await
    }
}

#[async_trait]
pub trait GitInterface: Send + Sync {
    async fn is_installed(&self) -> bool;
    async fn clone_repo(&self, url: &str) -> Result<git::GitOutput, crate::errors::GitError>;
    async fn status(&self) -> Result<git::GitOutput, crate::errors::GitError>;
    async fn commit_all(&self, message: &str) -> Result<git::GitOutput, crate::errors::GitError>;
    async fn push(&self) -> Result<git::GitOutput, crate::errors::GitError>;
}

#[derive(Default)]
pub struct RealGit {
    inner: git::GitCli,
}

impl RealGit {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GitInterface for RealGit {
    async fn is_installed(&self) -> bool {
        self.inner.is_installed().await
    }

    async fn clone_repo(&self, url: &str) -> Result<git::GitOutput, crate::errors::GitError> {
        self.inner.clone(url).await
    }

    async fn status(&self) -> Result<git::GitOutput, crate::errors::GitError> {
        self.inner.status().await
    }

    async fn commit_all(&self, message: &str) -> Result<git::GitOutput, crate::errors::GitError> {
        self.inner.commit_all(message).await
    }

    async fn push(&self) -> Result<git::GitOutput, crate::errors::GitError> {
        self.inner.push().await
    }
}

pub trait PromptInterface: Send + Sync {
    fn prompt_account(&self) -> Result<String>;
    fn prompt_secret(&self) -> Result<String>;
    fn prompt_commit_message(&self) -> Result<String>;
    fn confirm_push(&self) -> Result<bool>;
}

pub struct RealPrompt;

impl PromptInterface for RealPrompt {
    fn prompt_account(&self) -> Result<String> {
        crate::prompt::prompt_account()
    }

    fn prompt_secret(&self) -> Result<String> {
        crate::prompt::prompt_secret()
    }

    fn prompt_commit_message(&self) -> Result<String> {
        crate::prompt::prompt_commit_message()
    }

    fn confirm_push(&self) -> Result<bool> {
        crate::prompt::confirm_push()
    }
}
