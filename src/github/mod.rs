// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the events URL for a user
// - Fetching the raw event feed (status code + body text)
// - Classifying the status code into "go ahead" or a user-facing error
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod status;

// Re-export the public items so callers can write `github::fetch_events()`
pub use fetch::{build_client, events_url, fetch_events};
pub use status::classify;

#[cfg(test)]
pub(crate) use fetch::client_builder;
