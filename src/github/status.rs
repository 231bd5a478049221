// src/github/status.rs
// =============================================================================
// Maps the HTTP status of the events request to a result.
//
// HTTP status codes:
// - 200: the body is the event feed, keep going
// - 404: no such user
// - 403: the unauthenticated rate limit is used up
// - anything else (including other 2xx): generic error with the code
//
// Nothing here retries. A 403 is reported, not waited out.
// =============================================================================

use reqwest::StatusCode;

use crate::error::ActivityError;

pub fn classify(status: StatusCode, username: &str) -> Result<(), ActivityError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(ActivityError::UserNotFound(username.to_string())),
        StatusCode::FORBIDDEN => Err(ActivityError::RateLimited),
        other => Err(ActivityError::Http(other.as_u16())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_passes() {
        assert!(classify(StatusCode::OK, "octocat").is_ok());
    }

    #[test]
    fn test_not_found_names_user() {
        let err = classify(StatusCode::NOT_FOUND, "ghost").unwrap_err();
        assert_eq!(err.to_string(), "User not found: ghost");
    }

    #[test]
    fn test_forbidden_is_rate_limit() {
        let err = classify(StatusCode::FORBIDDEN, "octocat").unwrap_err();
        assert!(matches!(err, ActivityError::RateLimited));
    }

    #[test]
    fn test_other_codes_are_generic() {
        let err = classify(StatusCode::INTERNAL_SERVER_ERROR, "octocat").unwrap_err();
        assert_eq!(err.to_string(), "Error fetching data: HTTP 500");

        // only 200 is accepted
        let err = classify(StatusCode::NO_CONTENT, "octocat").unwrap_err();
        assert_eq!(err.to_string(), "Error fetching data: HTTP 204");
    }
}
