use clap::Parser;
use colored::*;

use github_commander::{app, cli, error, paths};

#[tokio::main]
async fn main() {
    paths::load_env_file();

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Setup => app::App::setup().await,
        command => app::App::run(command).await,
    };

    // Errors escaping a command are reported and the process exits cleanly,
    // never with a backtrace.
    if let Err(err) = result {
        eprintln!("{} {}", "✗".red(), error::format_error_chain(&err));
        std::process::exit(1);
    }
}
