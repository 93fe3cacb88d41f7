use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use super::AppState;
use crate::github::GitHubEvent;
use crate::handlers::{self, EventKind};

const HEADER_EVENT: &str = "x-github-event";

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Unable to read request body")]
    UnreadableBody(#[from] BytesRejection),

    #[error("Invalid JSON payload")]
    InvalidJson(#[from] serde_json::Error),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    message: &'static str,
}

/// Accepts a GitHub delivery and forwards it to the matching Discord channel.
///
/// The response only says the event was accepted. Whether a notification
/// went out, and whether Discord took it, does not change it.
pub async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WebhookResponse>, WebhookError> {
    let event_type = headers
        .get(HEADER_EVENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    info!("Received GitHub webhook event: {}", event_type);

    let body = body.inspect_err(|e| error!("Error reading request body: {}", e))?;

    let event = GitHubEvent::from_slice(&body)
        .inspect_err(|e| error!("Error parsing webhook payload: {}", e))?;

    let kind = EventKind::from_header(event_type);
    if let Some((channel, message)) = handlers::route(&kind, &event) {
        state
            .notifier
            .deliver(state.config.webhook_url(channel), &message)
            .await;
    }

    Ok(Json(WebhookResponse {
        message: "Webhook received successfully",
    }))
}
