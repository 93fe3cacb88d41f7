//! HTTP surface of the relay.
//!
//! - `POST /webhook/github` accepts GitHub deliveries and forwards the
//!   interesting ones to Discord
//! - `GET /health` liveness probe
//!
//! Every response carries permissive CORS headers and any `OPTIONS` request
//! is answered with an empty `204`.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{DefaultBodyLimit, Request},
    http::{
        HeaderName, Method, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::notifier::Notifier;

pub mod health;
pub mod webhook;

pub use health::health_check;
pub use webhook::handle_webhook;

/// GitHub caps webhook payloads at 25 MB.
pub const MAX_PAYLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Shared by every request. Read-only after startup.
pub struct AppState {
    pub config: Config,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: Config, notifier: Notifier) -> Self {
        AppState { config, notifier }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/webhook/github",
            post(handle_webhook).layer(DefaultBodyLimit::max(MAX_PAYLOAD_BYTES)),
        )
        .layer(cors_layer())
        .layer(middleware::from_fn(options_no_content))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static("x-github-event"),
            HeaderName::from_static("x-hub-signature-256"),
        ])
}

/// Turns whatever the inner stack answered to an `OPTIONS` request into an
/// empty `204`, keeping the CORS headers.
async fn options_no_content(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    let mut response = next.run(request).await;
    *response.status_mut() = StatusCode::NO_CONTENT;
    *response.body_mut() = Body::empty();
    response.headers_mut().remove(CONTENT_LENGTH);
    response.headers_mut().remove(CONTENT_TYPE);
    response
}
