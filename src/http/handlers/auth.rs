//! Login and account registration.

use crate::http::{ApiError, AppState, AuthenticatedUser};
use crate::identity::domain::{Role, UserId, Username};
use crate::identity::services::RegisterUserRequest;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct LoginBody {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    token_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterBody {
    username: String,
    password: String,
    role: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisteredUser {
    id: UserId,
    username: Username,
    role: Role,
}

/// `POST /auth/login`
pub(crate) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(body) = payload?;
    let user = state
        .services
        .users
        .authenticate(&body.username, &body.password)
        .await?;
    let issued = state.tokens.issue(&user)?;
    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: "bearer",
    }))
}

/// `POST /auth/register`
pub(crate) async fn register(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    payload: Result<Json<RegisterBody>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisteredUser>), ApiError> {
    let Json(body) = payload?;
    let mut request = RegisterUserRequest::new(body.username, body.password);
    if let Some(role) = body.role {
        request = request.with_role(role);
    }
    let user = state.services.users.register(&actor, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisteredUser {
            id: user.id(),
            username: user.username().clone(),
            role: user.role(),
        }),
    ))
}
