use github_commander::errors::{ApiError, GitError, ProfileError};

#[test]
fn test_error_enum_display_messages() {
    let a1 = ApiError::Status {
        status_code: 500,
        message: "Server blew up".to_string(),
        documentation_url: None,
    };
    assert!(a1.to_string().contains("500"));
    assert!(a1.to_string().contains("Server blew up"));
    assert!(a1.is_status());

    let a2 = ApiError::Transport("connection refused".to_string());
    assert!(a2.to_string().contains("HTTP transport error"));
    assert!(!a2.is_status());

    let p1 = ProfileError::Read("no file".to_string());
    assert!(p1.to_string().contains("Failed to read profile file"));

    let p2 = ProfileError::Parse("bad toml".to_string());
    assert!(p2.to_string().contains("Failed to parse profile file"));

    let g1 = GitError::CommandFailed {
        command: "clone https://example.com/repo".to_string(),
        status: 128,
        stderr: "fatal: repository not found".to_string(),
    };
    assert!(g1.to_string().contains("128"));
    assert!(g1.to_string().contains("repository not found"));

    let g2 = GitError::NotInstalled;
    assert!(g2.to_string().contains("not found on PATH"));
}

#[test]
fn test_format_error_chain_joins_contexts() {
    use anyhow::Context;
    use github_commander::error::format_error_chain;

    let err = anyhow::anyhow!("connection refused")
        .context("GET /user failed")
        .context("whoami command failed");

    let formatted = format_error_chain(&err);
    assert_eq!(
        formatted,
        "whoami command failed → GET /user failed → connection refused"
    );
}
