//! Command dispatch.
//!
//! Handlers receive the loaded [`Profile`] and the dependency seams
//! explicitly, with no global state, so every command can be driven in
//! tests with mock boundaries.

use anyhow::{Context, Result};
use colored::*;
use serde_json::Value;

use crate::app_deps::{GitHubApi, GitInterface, PromptInterface, RealGit, RealGitHubApi, RealPrompt};
use crate::cli::Commands;
use crate::config::Profile;
use crate::github::{JsonObject, Method};
use crate::{paths, validation};

pub struct App;

impl App {
    /// Run the setup command: (re-)create the profile interactively.
    pub async fn setup() -> Result<()> {
        Self::setup_with(&RealPrompt)
    }

    fn setup_with(prompt: &dyn PromptInterface) -> Result<()> {
        crate::prompt::setup_banner();

        let path = paths::profile_path();
        let profile = Profile::create(&path, prompt)?;

        println!(
            "{} Profile for {} saved to {}",
            "✓".green(),
            profile.account.bold(),
            path.display()
        );
        Ok(())
    }

    /// Load the profile once, build the real boundaries, and dispatch.
    pub async fn run(command: Commands) -> Result<()> {
        let prompt = RealPrompt;
        let profile = Profile::load_or_create(&paths::profile_path(), &prompt)
            .context("Failed to load or create profile")?;

        let api = RealGitHubApi::new(profile.api_token())?;
        let git = RealGit::new();

        Self::run_with_deps(&api, &git, &prompt, &profile, command).await
    }

    /// Dispatch a command against injected boundaries.
    pub async fn run_with_deps(
        api: &dyn GitHubApi,
        git: &dyn GitInterface,
        prompt: &dyn PromptInterface,
        profile: &Profile,
        command: Commands,
    ) -> Result<()> {
        if command.needs_git() && !git.is_installed().await {
            anyhow::bail!(crate::errors::GitError::NotInstalled);
        }

        match command {
            Commands::Setup => Self::setup_with(prompt),
            Commands::Whoami => Self::whoami(api, profile).await,
            Commands::Repos => Self::repos(api, profile).await,
            Commands::Search { query } => Self::search(api, &query).await,
            Commands::Clone { target } => Self::clone(git, &target).await,
            Commands::Status => Self::status(git).await,
            Commands::Commit { message, push } => {
                Self::commit(git, prompt, message, push).await
            }
            Commands::Push => Self::push(git).await,
            Commands::Api { method, path, body } => Self::api(api, &method, &path, body).await,
        }
    }

    async fn whoami(api: &dyn GitHubApi, profile: &Profile) -> Result<()> {
        let user = api.current_user().await;

        if user.is_empty() {
            println!(
                "{}",
                format!(
                    "No account data for '{}'. The stored token is a one-way hash and cannot \
                     authenticate; set GITHUB_TOKEN for real API access.",
                    profile.account
                )
                .yellow()
            );
            return Ok(());
        }

        let login = user.get("login").and_then(Value::as_str).unwrap_or("?");
        println!("{} {}", "Signed in as".bold(), login.green());
        if let Some(name) = user.get("name").and_then(Value::as_str) {
            println!("  name:  {}", name);
        }
        if let Some(repos) = user.get("public_repos").and_then(Value::as_u64) {
            println!("  public repos: {}", repos);
        }
        Ok(())
    }

    async fn repos(api: &dyn GitHubApi, profile: &Profile) -> Result<()> {
        let query = format!("user:{}", profile.account);
        let result = api.search_repositories(&query).await;
        Self::print_repo_results(&result);
        Ok(())
    }

    async fn search(api: &dyn GitHubApi, query: &str) -> Result<()> {
        let result = api.search_repositories(query).await;
        Self::print_repo_results(&result);
        Ok(())
    }

    fn print_repo_results(result: &JsonObject) {
        let items = result
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        if items.is_empty() {
            println!("{}", "No repositories found.".yellow());
            return;
        }

        if let Some(total) = result.get("total_count").and_then(Value::as_u64) {
            println!("{} {} repositories", "Found".bold(), total);
        }

        for item in &items {
            let full_name = item.get("full_name").and_then(Value::as_str).unwrap_or("?");
            let stars = item
                .get("stargazers_count")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            println!("  {} {}", full_name.cyan(), format!("★ {}", stars).dimmed());
            if let Some(description) = item.get("description").and_then(Value::as_str) {
                println!("    {}", description.dimmed());
            }
        }
    }

    async fn clone(git: &dyn GitInterface, target: &str) -> Result<()> {
        let url = validation::normalize_repo_url(target);
        let name = validation::repo_name_from_url(&url);

        println!("{} Cloning {}...", "⬇".cyan(), name.bold());
        let output = git
            .clone_repo(&url)
            .await
            .with_context(|| format!("Failed to clone {}", url))?;

        if !output.message().is_empty() {
            println!("{}", output.message());
        }
        println!("{} Cloned into ./{}", "✓".green(), name);
        Ok(())
    }

    async fn status(git: &dyn GitInterface) -> Result<()> {
        let output = git.status().await.context("git status failed")?;
        println!("{}", output.message());
        Ok(())
    }

    async fn commit(
        git: &dyn GitInterface,
        prompt: &dyn PromptInterface,
        message: Option<String>,
        push_flag: bool,
    ) -> Result<()> {
        let message = match message {
            Some(m) => m,
            None => prompt.prompt_commit_message()?,
        };

        let output = git
            .commit_all(&message)
            .await
            .context("Commit failed")?;
        println!("{} {}", "✓ Committed:".green(), output.message());

        let should_push = push_flag || prompt.confirm_push()?;
        if should_push {
            Self::push(git).await?;
        }
        Ok(())
    }

    async fn push(git: &dyn GitInterface) -> Result<()> {
        let output = git.push().await.context("Push failed")?;
        if !output.message().is_empty() {
            println!("{}", output.message());
        }
        println!("{} Pushed to GitHub", "✓".green());
        Ok(())
    }

    async fn api(
        api: &dyn GitHubApi,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<()> {
        let method: Method = method.parse()?;
        let body: Option<Value> = match body {
            Some(raw) => {
                Some(serde_json::from_str(&raw).context("Request body is not valid JSON")?)
            }
            None => None,
        };

        let result = api.request(method, path, body.as_ref()).await;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }
}
