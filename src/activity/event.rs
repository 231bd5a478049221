// src/activity/event.rs
// =============================================================================
// Turns one raw JSON event from the feed into a typed Activity.
//
// Each element of the feed is parsed on its own. Parsing either gives an
// Activity we know how to describe, or a Skip explaining why the element is
// dropped. A broken element never affects its neighbours.
//
// Rust concepts:
// - Enums with data: one variant per kind of activity
// - Display trait: how an Activity is printed
// - serde Deserialize: typed views of the event and its payload
// - Option combinators: and_then / ok_or for "maybe missing" fields
// =============================================================================

use std::fmt;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A recognized event, reduced to what we print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    /// PushEvent: number of commits in the push
    Push { repo: String, commits: usize },
    /// IssuesEvent with an action we report
    Issue { repo: String, action: IssueAction },
    /// WatchEvent (GitHub's name for starring)
    Star { repo: String },
    /// ForkEvent
    Fork { repo: String },
    /// CreateEvent
    Create { repo: String, target: CreatedRef },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueAction {
    Opened,
    Closed,
}

/// What a CreateEvent created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedRef {
    Repository,
    /// A branch or tag, e.g. ref_type "branch", name "main"
    Ref { ref_type: String, name: String },
}

/// Why an element of the feed produced no line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Skip {
    #[error("missing event type")]
    MissingType,
    #[error("missing repo name")]
    MissingRepoName,
    #[error("unrecognized event type {0}")]
    Unrecognized(String),
    #[error("missing payload field '{0}'")]
    MissingPayloadField(&'static str),
    #[error("issue action '{0}' is not reported")]
    IgnoredIssueAction(String),
    /// A field had the wrong JSON type (e.g. `commits` is a number)
    #[error("malformed event: {0}")]
    Malformed(String),
}

// Fields every event carries, as far as we care about them
//
// All optional: a missing (or null) field becomes None and the event is
// skipped later with a precise reason.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Option<String>,
    repo: Option<RawRepo>,
    payload: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: Option<String>,
}

// Payload of a PushEvent; only the number of commits matters
#[derive(Debug, Deserialize)]
struct PushPayload {
    commits: Option<Vec<IgnoredAny>>,
}

#[derive(Debug, Deserialize)]
struct IssuesPayload {
    action: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreatePayload {
    ref_type: Option<String>,
    #[serde(rename = "ref")]
    reference: Option<String>,
}

// The `type` tag of an event, with a catch-all for everything we don't render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Push,
    Issues,
    Watch,
    Fork,
    Create,
    Other,
}

impl EventKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "PushEvent" => EventKind::Push,
            "IssuesEvent" => EventKind::Issues,
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "CreateEvent" => EventKind::Create,
            _ => EventKind::Other,
        }
    }
}

impl Activity {
    /// Parses one element of the event feed
    ///
    /// `type`, `repo` and `repo.name` must be present for any event.
    /// Payload requirements depend on the type (see the match below).
    pub fn from_value(event: &Value) -> Result<Activity, Skip> {
        let raw = RawEvent::deserialize(event).map_err(malformed)?;

        let tag = raw.kind.ok_or(Skip::MissingType)?;
        let repo = raw
            .repo
            .and_then(|repo| repo.name)
            .ok_or(Skip::MissingRepoName)?;
        let payload = raw.payload.as_ref();

        match EventKind::from_tag(&tag) {
            EventKind::Push => {
                let payload: PushPayload = parse_payload(payload)?;
                let commits = payload
                    .commits
                    .ok_or(Skip::MissingPayloadField("commits"))?;
                Ok(Activity::Push {
                    repo,
                    commits: commits.len(),
                })
            }
            EventKind::Issues => {
                let payload: IssuesPayload = parse_payload(payload)?;
                let action = payload
                    .action
                    .ok_or(Skip::MissingPayloadField("action"))?;
                let action = match action.as_str() {
                    "opened" => IssueAction::Opened,
                    "closed" => IssueAction::Closed,
                    _ => return Err(Skip::IgnoredIssueAction(action)),
                };
                Ok(Activity::Issue { repo, action })
            }
            EventKind::Watch => Ok(Activity::Star { repo }),
            EventKind::Fork => Ok(Activity::Fork { repo }),
            EventKind::Create => {
                let payload: CreatePayload = parse_payload(payload)?;
                let ref_type = payload
                    .ref_type
                    .ok_or(Skip::MissingPayloadField("ref_type"))?;

                let target = if ref_type == "repository" {
                    CreatedRef::Repository
                } else {
                    let name = payload
                        .reference
                        .ok_or(Skip::MissingPayloadField("ref"))?;
                    CreatedRef::Ref { ref_type, name }
                };
                Ok(Activity::Create { repo, target })
            }
            EventKind::Other => Err(Skip::Unrecognized(tag)),
        }
    }
}

// Deserializes the type-specific payload; a missing payload is a skip
fn parse_payload<T: DeserializeOwned>(payload: Option<&Value>) -> Result<T, Skip> {
    let payload = payload.ok_or(Skip::MissingPayloadField("payload"))?;
    T::deserialize(payload).map_err(malformed)
}

fn malformed(err: serde_json::Error) -> Skip {
    Skip::Malformed(err.to_string())
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Push { repo, commits } => {
                let plural = if *commits == 1 { "" } else { "s" };
                write!(f, "Pushed {} commit{} to {}", commits, plural, repo)
            }
            Activity::Issue {
                repo,
                action: IssueAction::Opened,
            } => write!(f, "Opened a new issue in {}", repo),
            Activity::Issue {
                repo,
                action: IssueAction::Closed,
            } => write!(f, "Closed an issue in {}", repo),
            Activity::Star { repo } => write!(f, "Starred {}", repo),
            Activity::Fork { repo } => write!(f, "Forked {}", repo),
            Activity::Create {
                repo,
                target: CreatedRef::Repository,
            } => write!(f, "Created repository {}", repo),
            Activity::Create {
                repo,
                target: CreatedRef::Ref { ref_type, name },
            } => write!(f, "Created {} {} in {}", ref_type, name, repo),
        }
    }
}
