// src/activity/summary.rs
// =============================================================================
// Turns the body of a successful events response into printable lines.
//
// The feed is walked in order. Elements that don't parse into an Activity
// are logged at debug level and dropped; they don't use up one of the
// MAX_EVENTS slots. Output order is input order (newest first).
// =============================================================================

use log::debug;
use serde_json::Value;

use super::event::Activity;

/// Most lines printed for one user
pub const MAX_EVENTS: usize = 10;

// Parses the JSON body and returns at most MAX_EVENTS formatted lines
//
// Returns: Err only if the body is not valid JSON, in which case nothing
// is printed. Valid JSON that is not an array is an empty feed.
pub fn summarize(body: &str) -> Result<Vec<String>, serde_json::Error> {
    let root: Value = serde_json::from_str(body)?;

    let events: &[Value] = match root.as_array() {
        Some(events) => events.as_slice(),
        None => {
            debug!("Response body is not a JSON array, no events to show");
            &[]
        }
    };

    Ok(collect_activities(events)
        .iter()
        .map(Activity::to_string)
        .collect())
}

// Keeps the first MAX_EVENTS elements that parse
fn collect_activities(events: &[Value]) -> Vec<Activity> {
    events
        .iter()
        .enumerate()
        .filter_map(|(index, event)| match Activity::from_value(event) {
            Ok(activity) => Some(activity),
            Err(skip) => {
                debug!("Skipping event #{}: {}", index, skip);
                None
            }
        })
        .take(MAX_EVENTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn star(repo: &str) -> Value {
        json!({ "type": "WatchEvent", "repo": { "name": repo } })
    }

    #[test]
    fn test_formats_in_input_order() {
        let body = json!([
            { "type": "PushEvent", "repo": { "name": "a/one" }, "payload": { "commits": [1, 2, 3] } },
            star("a/two"),
            { "type": "ForkEvent", "repo": { "name": "a/three" } }
        ])
        .to_string();

        let lines = summarize(&body).unwrap();
        assert_eq!(
            lines,
            vec!["Pushed 3 commits to a/one", "Starred a/two", "Forked a/three"]
        );
    }

    #[test]
    fn test_caps_at_ten_lines() {
        let events: Vec<Value> = (0..15).map(|i| star(&format!("o/r{}", i))).collect();
        let lines = summarize(&Value::Array(events).to_string()).unwrap();

        assert_eq!(lines.len(), MAX_EVENTS);
        assert_eq!(lines[0], "Starred o/r0");
        assert_eq!(lines[9], "Starred o/r9");
    }

    #[test]
    fn test_skipped_events_do_not_use_slots() {
        // 5 unusable events up front, then 12 good ones
        let mut events = vec![
            json!({ "type": "WatchEvent", "repo": {} }),
            json!({ "type": "PushEvent", "repo": { "name": "bad/push" }, "payload": {} }),
            json!({ "type": "IssuesEvent", "repo": { "name": "a/b" }, "payload": { "action": "reopened" } }),
            json!({ "type": "GollumEvent", "repo": { "name": "a/b" } }),
            json!("garbage"),
        ];
        events.extend((0..12).map(|i| star(&format!("o/r{}", i))));

        let lines = summarize(&Value::Array(events).to_string()).unwrap();
        assert_eq!(lines.len(), MAX_EVENTS);
        assert_eq!(lines[0], "Starred o/r0");
        assert_eq!(lines[9], "Starred o/r9");
    }

    #[test]
    fn test_malformed_event_does_not_stop_processing() {
        let body = json!([
            { "type": "PushEvent", "repo": { "name": "bad/push" }, "payload": { "size": 1 } },
            { "type": "CreateEvent", "repo": { "name": "a/b" }, "payload": { "ref_type": "branch", "ref": "main" } }
        ])
        .to_string();

        assert_eq!(summarize(&body).unwrap(), vec!["Created branch main in a/b"]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(summarize("[{\"type\": ").is_err());
        assert!(summarize("<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_non_array_is_empty_feed() {
        assert!(summarize(r#"{"message": "hi"}"#).unwrap().is_empty());
        assert!(summarize("[]").unwrap().is_empty());
    }
}
