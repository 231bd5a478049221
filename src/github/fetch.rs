// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public event feed from the GitHub API.
//
// Strategy:
// - Build `{api_url}/users/{username}/events` with the `url` crate
// - Send one unauthenticated GET (no timeout, no retries)
// - Hand back the status code and the body text untouched
//
// Deciding what a status code *means* is done in status.rs, and turning the
// body into events is done in the activity module.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - Borrowing: The client is passed by reference and reused
// =============================================================================

use log::debug;
use reqwest::{Client, ClientBuilder, StatusCode};
use url::Url;

use crate::error::ActivityError;

// GitHub rejects API requests that carry no User-Agent header
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Raw outcome of the events request
#[derive(Debug)]
pub struct FetchResult {
    pub status: StatusCode,
    pub body: String,
}

// Shared builder so tests can tweak it (e.g. disable proxies) before building
pub(crate) fn client_builder() -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT)
}

// Creates the HTTP client used for the run
//
// No timeout is configured: a hung connection blocks until Ctrl-C.
pub fn build_client() -> Result<Client, ActivityError> {
    Ok(client_builder().build()?)
}

// Builds the events URL for a user
//
// Parameters:
//   api_url: base URL of the API (e.g., "https://api.github.com")
//   username: GitHub login, used verbatim as one path segment
//
// The username is percent-encoded, so "a b" becomes "a%20b" and a "/" can
// never reach a different endpoint.
//
// Example:
//   ("https://api.github.com", "octocat")
//     -> "https://api.github.com/users/octocat/events"
pub fn events_url(api_url: &str, username: &str) -> Result<Url, ActivityError> {
    let invalid = || ActivityError::InvalidApiUrl(api_url.to_string());

    let mut url = Url::parse(api_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(["users", username, "events"]);

    Ok(url)
}

// Sends the GET request and reads the whole body
//
// Returns: FetchResult for *any* status code; only transport failures
// (connect, TLS, reset while reading) come back as errors
pub async fn fetch_events(client: &Client, url: Url) -> Result<FetchResult, ActivityError> {
    debug!("GET {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    debug!("HTTP {} ({} bytes)", status.as_u16(), body.len());

    Ok(FetchResult { status, body })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does fetch_events take `url: Url` by value?
//    - reqwest's get() accepts anything that converts into a Url
//    - We built the Url just for this request, so we can move it in
//
// 2. What is concat!/env!?
//    - Both are compile-time macros
//    - env!("CARGO_PKG_VERSION") is replaced by the version from Cargo.toml
//    - concat! glues the pieces into one &'static str
//
// 3. What does the ? do with reqwest errors here?
//    - ActivityError has a #[from] reqwest::Error variant (Transport)
//    - ? calls From::from for us, so the conversion is automatic
// -----------------------------------------------------------------------------
