use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use serial_test::serial;

use github_commander::app::App;
use github_commander::app_deps::{GitHubApi, GitInterface, PromptInterface};
use github_commander::cli::Commands;
use github_commander::config::Profile;
use github_commander::errors::GitError;
use github_commander::git::GitOutput;
use github_commander::github::{JsonObject, Method};

fn object(value: Value) -> JsonObject {
    value.as_object().cloned().unwrap_or_default()
}

#[derive(Default)]
struct MockGitHubApi {
    user: JsonObject,
    search_results: JsonObject,
    requests: Mutex<Vec<(Method, String)>>,
}

#[async_trait]
impl GitHubApi for MockGitHubApi {
    async fn request(&self, method: Method, path: &str, _body: Option<&Value>) -> JsonObject {
        self.requests.lock().unwrap().push((method, path.to_string()));
        JsonObject::new()
    }

    async fn current_user(&self) -> JsonObject {
        self.user.clone()
    }

    async fn search_repositories(&self, query: &str) -> JsonObject {
        self.requests
            .lock()
            .unwrap()
            .push((Method::Get, format!("/search/repositories?q={}", query)));
        self.search_results.clone()
    }
}

struct MockGit {
    installed: bool,
    calls: Mutex<Vec<String>>,
}

impl MockGit {
    fn new() -> Self {
        Self {
            installed: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitInterface for MockGit {
    async fn is_installed(&self) -> bool {
        self.installed
    }

    async fn clone_repo(&self, url: &str) -> Result<GitOutput, GitError> {
        self.calls.lock().unwrap().push(format!("clone {}", url));
        Ok(GitOutput::default())
    }

    async fn status(&self) -> Result<GitOutput, GitError> {
        self.calls.lock().unwrap().push("status".to_string());
        Ok(GitOutput {
            stdout: "On branch main".to_string(),
            stderr: String::new(),
        })
    }

    async fn commit_all(&self, message: &str) -> Result<GitOutput, GitError> {
        self.calls.lock().unwrap().push(format!("commit {}", message));
        Ok(GitOutput {
            stdout: format!("[main abc1234] {}", message),
            stderr: String::new(),
        })
    }

    async fn push(&self) -> Result<GitOutput, GitError> {
        self.calls.lock().unwrap().push("push".to_string());
        Ok(GitOutput::default())
    }
}

struct MockPrompt {
    commit_message: String,
    push_answer: bool,
}

impl Default for MockPrompt {
    fn default() -> Self {
        Self {
            commit_message: "from prompt".to_string(),
            push_answer: false,
        }
    }
}

impl PromptInterface for MockPrompt {
    fn prompt_account(&self) -> Result<String> {
        Ok("octocat".to_string())
    }

    fn prompt_secret(&self) -> Result<String> {
        Ok("abc123".to_string())
    }

    fn prompt_commit_message(&self) -> Result<String> {
        Ok(self.commit_message.clone())
    }

    fn confirm_push(&self) -> Result<bool> {
        Ok(self.push_answer)
    }
}

fn test_profile() -> Profile {
    Profile::from_setup("octocat".to_string(), "abc123")
}

#[tokio::test]
async fn test_whoami_with_account_data() {
    let api = MockGitHubApi {
        user: object(serde_json::json!({"login": "octocat", "public_repos": 8})),
        ..Default::default()
    };
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    let res = App::run_with_deps(&api, &git, &prompt, &test_profile(), Commands::Whoami).await;
    assert!(res.is_ok());
}

#[tokio::test]
async fn test_whoami_with_empty_response_does_not_fail() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    let res = App::run_with_deps(&api, &git, &prompt, &test_profile(), Commands::Whoami).await;
    assert!(res.is_ok(), "an empty API result is recoverable");
}

#[tokio::test]
async fn test_repos_searches_for_profile_account() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    App::run_with_deps(&api, &git, &prompt, &test_profile(), Commands::Repos)
        .await
        .unwrap();

    let requests = api.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].1.contains("user:octocat"));
}

#[tokio::test]
async fn test_clone_normalizes_shorthand_target() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Clone {
            target: "octocat/hello-world".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        git.calls(),
        vec!["clone https://github.com/octocat/hello-world".to_string()]
    );
}

#[tokio::test]
async fn test_commit_prompts_for_message_and_asks_before_push() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt {
        commit_message: "tweak readme".to_string(),
        push_answer: true,
    };

    App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Commit {
            message: None,
            push: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(
        git.calls(),
        vec!["commit tweak readme".to_string(), "push".to_string()]
    );
}

#[tokio::test]
async fn test_commit_declined_push_stays_local() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt {
        commit_message: "local only".to_string(),
        push_answer: false,
    };

    App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Commit {
            message: None,
            push: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(git.calls(), vec!["commit local only".to_string()]);
}

#[tokio::test]
async fn test_commit_push_flag_skips_confirmation() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    // push_answer=false: the flag must win without consulting the prompt
    let prompt = MockPrompt::default();

    App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Commit {
            message: Some("release".to_string()),
            push: true,
        },
    )
    .await
    .unwrap();

    assert_eq!(
        git.calls(),
        vec!["commit release".to_string(), "push".to_string()]
    );
}

#[tokio::test]
async fn test_git_command_without_git_installed() {
    let api = MockGitHubApi::default();
    let git = MockGit {
        installed: false,
        calls: Mutex::new(Vec::new()),
    };
    let prompt = MockPrompt::default();

    let res = App::run_with_deps(&api, &git, &prompt, &test_profile(), Commands::Status).await;
    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("not found on PATH"));
    assert!(git.calls().is_empty());
}

#[tokio::test]
async fn test_api_command_rejects_unknown_method() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    let res = App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Api {
            method: "PATCH".to_string(),
            path: "/user".to_string(),
            body: None,
        },
    )
    .await;
    assert!(res.is_err());
}

#[tokio::test]
async fn test_api_command_dispatches_request() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Api {
            method: "delete".to_string(),
            path: "/user/starred/octocat/hello-world".to_string(),
            body: None,
        },
    )
    .await
    .unwrap();

    let requests = api.requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![(
            Method::Delete,
            "/user/starred/octocat/hello-world".to_string()
        )]
    );
}

#[tokio::test]
async fn test_api_command_rejects_malformed_body() {
    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    let res = App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Api {
            method: "POST".to_string(),
            path: "/user/repos".to_string(),
            body: Some("{not json".to_string()),
        },
    )
    .await;
    assert!(res.is_err());
    assert!(api.requests.lock().unwrap().is_empty());
}

#[test]
#[serial]
fn test_setup_writes_profile_to_override_path() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("profile.toml");

    unsafe {
        std::env::set_var("GH_COMMANDER_PROFILE", &path);
    }

    let api = MockGitHubApi::default();
    let git = MockGit::new();
    let prompt = MockPrompt::default();

    tokio_test::block_on(App::run_with_deps(
        &api,
        &git,
        &prompt,
        &test_profile(),
        Commands::Setup,
    ))
    .unwrap();

    let written = Profile::from_file(&path).unwrap();
    assert_eq!(written.account, "octocat");
    assert_eq!(written.token_hash.len(), 32);

    unsafe {
        std::env::remove_var("GH_COMMANDER_PROFILE");
    }
}
