//! Workflow catalog.

use crate::http::{ApiError, AppState};
use crate::status::domain::Status;
use axum::Json;
use axum::extract::State;

/// `GET /statuses`
pub(crate) async fn list(State(state): State<AppState>) -> Result<Json<Vec<Status>>, ApiError> {
    Ok(Json(state.services.statuses.list().await?))
}
