use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. No dependencies to check — the service is up if it answers.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
