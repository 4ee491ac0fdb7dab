//! Task board endpoints.

use crate::http::{ApiError, AppState, AuthenticatedUser};
use crate::task::domain::TaskId;
use crate::task::services::{CreateTaskRequest, TaskPatch, TaskSummary, TaskView};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTaskBody {
    title: String,
    #[serde(default)]
    short_description: String,
    description: Option<String>,
    status_id: i64,
    assignee_id: Option<i64>,
}

impl CreateTaskBody {
    fn into_request(self) -> CreateTaskRequest {
        let mut request = CreateTaskRequest::new(self.title, self.status_id)
            .with_short_description(self.short_description);
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        if let Some(assignee_id) = self.assignee_id {
            request = request.with_assignee_id(assignee_id);
        }
        request
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PatchTaskBody {
    title: Option<String>,
    short_description: Option<String>,
    description: Option<String>,
    status_id: Option<i64>,
    assignee_id: Option<i64>,
}

impl PatchTaskBody {
    fn into_patch(self) -> TaskPatch {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(title);
        }
        if let Some(short_description) = self.short_description {
            patch = patch.with_short_description(short_description);
        }
        if let Some(description) = self.description {
            patch = patch.with_description(description);
        }
        if let Some(status_id) = self.status_id {
            patch = patch.with_status_id(status_id);
        }
        if let Some(assignee_id) = self.assignee_id {
            patch = patch.with_assignee_id(assignee_id);
        }
        patch
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    status: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Created {
    id: TaskId,
}

/// `GET /tasks`
pub(crate) async fn list(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
) -> Result<Json<Vec<TaskSummary>>, ApiError> {
    Ok(Json(state.services.tasks.list(&actor).await?))
}

/// `POST /tasks`
pub(crate) async fn create(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let Json(body) = payload?;
    let task = state
        .services
        .tasks
        .create(&actor, body.into_request())
        .await?;
    Ok((StatusCode::CREATED, Json(Created { id: task.id() })))
}

/// `GET /tasks/{id}`
pub(crate) async fn get(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    task_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TaskView>, ApiError> {
    let Path(raw_id) = task_id?;
    let view = state
        .services
        .tasks
        .get(&actor, TaskId::from_persisted(raw_id))
        .await?;
    Ok(Json(view))
}

/// `PATCH /tasks/{id}`
pub(crate) async fn update(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    task_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PatchTaskBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(raw_id) = task_id?;
    let Json(body) = payload?;
    state
        .services
        .tasks
        .update_fields(&actor, TaskId::from_persisted(raw_id), body.into_patch())
        .await?;
    Ok(Json(json!({ "status": "updated" })))
}

/// `PATCH /tasks/{id}/status`
pub(crate) async fn update_status(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    task_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StatusBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(raw_id) = task_id?;
    let Json(body) = payload?;
    state
        .services
        .tasks
        .update_status(&actor, TaskId::from_persisted(raw_id), &body.status)
        .await?;
    Ok(Json(json!({ "status": "updated" })))
}
