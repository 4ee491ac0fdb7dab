//! Bearer token extraction.

use super::{ApiError, AppState};
use crate::identity::domain::User;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::{debug, warn};

/// The current user, resolved from the bearer token on every request.
///
/// Resolution goes through the user directory, so a role change applies to
/// the next request and a renamed user's old tokens stop working.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let token = bearer_token(parts)?;
        let claims = state.tokens.verify(token).map_err(|err| {
            warn!(error = %err, "bearer token rejected");
            ApiError::unauthenticated("invalid or expired token")
        })?;
        let user = state
            .services
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(subject = %claims.sub, "bearer token names unknown user");
                ApiError::unauthenticated("invalid or expired token")
            })?;
        debug!(user = %user.id(), "request authenticated");
        Ok(Self(user))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthenticated("missing bearer token"))?;
    let value = header
        .to_str()
        .map_err(|_| ApiError::unauthenticated("malformed authorization header"))?;
    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| ApiError::unauthenticated("malformed authorization header"))?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return Err(ApiError::unauthenticated("malformed authorization header"));
    }
    Ok(token.trim())
}
