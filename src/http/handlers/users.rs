//! User listing and administration.

use crate::http::{ApiError, AppState, AuthenticatedUser};
use crate::identity::domain::{UserId, UserSummary};
use crate::identity::services::UpdateUserRequest;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateUserBody {
    username: Option<String>,
    role: Option<String>,
    password: Option<String>,
}

impl UpdateUserBody {
    fn into_request(self) -> UpdateUserRequest {
        let mut request = UpdateUserRequest::new();
        if let Some(username) = self.username {
            request = request.with_username(username);
        }
        if let Some(role) = self.role {
            request = request.with_role(role);
        }
        if let Some(password) = self.password {
            request = request.with_password(password);
        }
        request
    }
}

/// `GET /users`
pub(crate) async fn list(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    Ok(Json(state.services.users.list(&actor).await?))
}

/// `GET /users/me`
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub(crate) async fn me(AuthenticatedUser(actor): AuthenticatedUser) -> Json<UserSummary> {
    Json(actor.summary())
}

/// `PATCH /users/{id}`
pub(crate) async fn update(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    user_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUserBody>, JsonRejection>,
) -> Result<Json<UserSummary>, ApiError> {
    let Path(raw_id) = user_id?;
    let Json(body) = payload?;
    let user = state
        .services
        .users
        .update_user(&actor, UserId::from_persisted(raw_id), body.into_request())
        .await?;
    Ok(Json(user.summary()))
}
