// src/error.rs
// =============================================================================
// Every way a run can fail, as one enum.
//
// The #[error(...)] text of each variant is the exact message we show the
// user, so main only has to log `err` and pick an exit code.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    /// The API answered 404 for this username
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The API answered 403 (unauthenticated rate limit hit)
    #[error("API rate limit exceeded. Try again later.")]
    RateLimited,

    /// Any other non-200 status
    #[error("Error fetching data: HTTP {0}")]
    Http(u16),

    /// Connection refused, DNS failure, reset while reading the body, ...
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body of a 200 response was not valid JSON
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Ctrl-C arrived while we were waiting on the network
    #[error("Request interrupted")]
    Interrupted,

    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
}

impl ActivityError {
    /// Process exit code for this failure
    ///
    /// 130 is the shell convention for "terminated by SIGINT".
    pub fn exit_code(&self) -> i32 {
        match self {
            ActivityError::Interrupted => 130,
            _ => 1,
        }
    }
}
