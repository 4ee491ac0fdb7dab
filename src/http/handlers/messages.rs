//! Task chat endpoints.

use crate::http::{ApiError, AppState, AuthenticatedUser};
use crate::message::domain::MessageId;
use crate::message::services::MessageView;
use crate::task::domain::TaskId;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct PostBody {
    content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Posted {
    id: MessageId,
}

/// `GET /tasks/{id}/messages`
pub(crate) async fn list(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    task_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<MessageView>>, ApiError> {
    let Path(raw_id) = task_id?;
    let thread = state
        .services
        .messages
        .list(&actor, TaskId::from_persisted(raw_id))
        .await?;
    Ok(Json(thread))
}

/// `POST /tasks/{id}/messages`
pub(crate) async fn post(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    task_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PostBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Posted>), ApiError> {
    let Path(raw_id) = task_id?;
    let Json(body) = payload?;
    let message = state
        .services
        .messages
        .post(&actor, TaskId::from_persisted(raw_id), body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(Posted { id: message.id() })))
}
