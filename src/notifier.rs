//! Outbound delivery to Discord channel webhooks.
//!
//! Delivery is best effort. Failures are logged and never reach the caller
//! of the inbound webhook, and nothing is retried.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url, header::CONTENT_TYPE};
use thiserror::Error;
use tracing::{error, info};

use crate::discord::Message;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to serialize Discord message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to send Discord message: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Discord API error (status {status}): {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Debug, Clone)]
pub struct Notifier {
    client: Client,
}

impl Notifier {
    pub fn new(client: Client) -> Self {
        Notifier { client }
    }

    /// Builds a notifier whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Notifier::new(client))
    }

    /// Posts `message` to `webhook_url`.
    pub async fn send(&self, webhook_url: &Url, message: &Message) -> Result<(), NotifyError> {
        let body = serde_json::to_vec(message)?;

        let response = self
            .client
            .post(webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status { status, body });
        }

        Ok(())
    }

    /// Like [`Notifier::send`], but only logs the outcome.
    pub async fn deliver(&self, webhook_url: &Url, message: &Message) {
        match self.send(webhook_url, message).await {
            Ok(()) => info!("Discord message sent successfully"),
            Err(NotifyError::Status { status, body }) => {
                error!(status = status.as_u16(), body = %body, "Discord API error");
            }
            Err(e) => error!(error = %e, "Discord delivery failed"),
        }
    }
}
