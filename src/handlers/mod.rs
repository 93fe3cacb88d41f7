//! Event classification and per-event notification builders.
//!
//! Handlers are pure: they look at a decoded event and either build the
//! Discord message for it or decide it is not worth a notification.

use tracing::info;

use crate::config::Channel;
use crate::discord::Message;
use crate::github::GitHubEvent;

pub mod pull_request;
pub mod workflow_run;

pub use pull_request::pull_request_notification;
pub use workflow_run::workflow_run_notification;

/// Value of the `X-GitHub-Event` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    WorkflowRun,
    Other(String),
}

impl EventKind {
    pub fn from_header(value: &str) -> Self {
        match value {
            "pull_request" => EventKind::PullRequest,
            "workflow_run" => EventKind::WorkflowRun,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// Channel that notifications for this kind of event go to.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            EventKind::PullRequest => Some(Channel::Development),
            EventKind::WorkflowRun => Some(Channel::Testing),
            EventKind::Other(_) => None,
        }
    }
}

/// Picks the handler for `kind` and returns the message to send, if any.
pub fn route(kind: &EventKind, event: &GitHubEvent) -> Option<(Channel, Message)> {
    let message = match kind {
        EventKind::PullRequest => pull_request_notification(event),
        EventKind::WorkflowRun => workflow_run_notification(event),
        EventKind::Other(event_type) => {
            info!("Ignoring unhandled event type: {}", event_type);
            return None;
        }
    }?;

    Some((kind.channel()?, message))
}
