use clap::{Parser, Subcommand};

/// Interactive CLI companion for GitHub and local git repositories.
#[derive(Parser, Debug)]
#[command(name = "gh-commander", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or replace the local profile (account + token)
    Setup,
    /// Show the authenticated GitHub account
    Whoami,
    /// List the configured account's repositories
    Repos,
    /// Search GitHub repositories
    Search {
        /// Search query, qualifiers allowed (e.g. "cli language:rust")
        query: String,
    },
    /// Clone a repository ("owner/repo" shorthand or full URL)
    Clone {
        /// Repository to clone
        target: String,
    },
    /// Show git status of the current directory
    Status,
    /// Stage all changes and commit
    Commit {
        /// Commit message (prompted for when omitted)
        #[arg(short, long)]
        message: Option<String>,
        /// Push right after committing, without asking
        #[arg(long)]
        push: bool,
    },
    /// Push to the configured remote
    Push,
    /// Issue a raw API request and print the JSON response
    Api {
        /// HTTP method: GET, POST, PUT, or DELETE
        method: String,
        /// Request path, e.g. /user
        path: String,
        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },
}

impl Commands {
    /// Whether this command shells out to the git executable.
    pub fn needs_git(&self) -> bool {
        matches!(
            self,
            Commands::Clone { .. } | Commands::Status | Commands::Commit { .. } | Commands::Push
        )
    }
}
