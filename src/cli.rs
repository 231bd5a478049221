// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool takes exactly one positional argument: the GitHub username.
// If it is missing (or there are extra ones), clap prints the usage message
// to stderr and exits with status 2 before we ever touch the network.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

/// Default base URL of the public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gh-activity",
    version,
    about = "Show a GitHub user's recent public activity",
    long_about = "gh-activity fetches the public event feed of a GitHub user and prints \
                  a one-line summary for each of the ten most recent recognized events \
                  (pushes, issues, stars, forks and created refs)."
)]
pub struct Cli {
    /// GitHub username whose activity should be shown
    ///
    /// Example: gh-activity torvalds
    pub username: String,

    /// Base URL of the GitHub REST API
    ///
    /// Point this at a GitHub Enterprise host (e.g. https://ghe.example.com/api/v3)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}
