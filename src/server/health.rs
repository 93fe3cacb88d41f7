use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe. Always `200 {"status":"ok"}`.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
