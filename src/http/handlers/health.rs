//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// `GET /`
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub(crate) async fn root() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
