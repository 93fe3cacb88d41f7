//! The subset of a GitHub webhook payload the relay reads.
//!
//! Every field is optional on the wire. Missing fields and explicit `null`s
//! both decode to the zero value, so handlers never see a decode error for a
//! field that does not belong to the event they are looking at.

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GitHubEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repository: Repository,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: User,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pull_request: PullRequest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workflow_run: WorkflowRun,
}

impl GitHubEvent {
    /// Decodes a webhook body.
    ///
    /// A JSON `null` is an empty event and a repeated key keeps its last
    /// value. Any other non-object document is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice(body)? {
            Value::Null => Ok(GitHubEvent::default()),
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde_json::Error::custom("expected a JSON object")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Repository {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PullRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub merged: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkflowRun {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// `null` until the run completes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub conclusion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
