// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (exactly one username)
// 2. Fetch the user's public event feed from the GitHub API
// 3. Check the HTTP status, then format up to ten recognized events
// 4. Print the lines and exit (0 = ok, 1 = error, 2 = usage, 130 = Ctrl-C)
//
// Rust concepts used:
// - async/await: The HTTP request is async (reqwest + tokio)
// - Result<T, E>: For error handling (T = success type, E = error type)
// - tokio::select!: Racing the request against Ctrl-C
// =============================================================================

// Module declarations - tells Rust about our other source files
mod activity; // src/activity/ - turning events into lines
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - ActivityError
mod github; // src/github/ - talking to the GitHub API
mod report; // src/report.rs - printing lines

#[cfg(test)]
mod test_support;

use std::future::Future;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use error::ActivityError;
use log::error;
use reqwest::Client;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    init_logging();

    // On a usage error clap prints the message and exits with code 2 here
    let cli = Cli::parse();

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            // Setup failures (no HTTP client, stdout closed, ...)
            error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Sends log records to stderr as "LEVEL: message"
//
// RUST_LOG=debug shows the request URL and every skipped event
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

// This is the main application logic
// Returns:
//   Ok(code) = the process exit code for this run
//   Err = unexpected setup error
async fn run(cli: &Cli) -> Result<i32> {
    let client = github::build_client().context("failed to create HTTP client")?;

    let outcome = race(
        fetch_activity(&client, &cli.api_url, &cli.username),
        tokio::signal::ctrl_c(),
    )
    .await;

    match outcome {
        Ok(lines) => {
            report::write_lines(&mut io::stdout().lock(), &lines)
                .context("failed to write to stdout")?;
            Ok(0)
        }
        Err(e) => {
            error!("{}", e);
            Ok(e.exit_code())
        }
    }
}

// Runs the fetch until it finishes or the interrupt future fires
//
// If the interrupt future fails (e.g. the Ctrl-C handler can't be
// installed) that branch is disabled and the fetch runs to completion.
async fn race<F, I>(fetch: F, interrupt: I) -> Result<Vec<String>, ActivityError>
where
    F: Future<Output = Result<Vec<String>, ActivityError>>,
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        result = fetch => result,
        Ok(()) = interrupt => Err(ActivityError::Interrupted),
    }
}

// Fetch -> classify -> summarize, for one user
//
// Any error here ends the run; nothing has been printed yet at that point
async fn fetch_activity(
    client: &Client,
    api_url: &str,
    username: &str,
) -> Result<Vec<String>, ActivityError> {
    let url = github::events_url(api_url, username)?;
    let fetched = github::fetch_events(client, url).await?;

    github::classify(fetched.status, username)?;

    Ok(activity::summarize(&fetched.body)?)
}
