//! HTTP error mapping.

use crate::auth::TokenError;
use crate::error::ErrorKind;
use crate::identity::services::UserDirectoryError;
use crate::message::services::MessageThreadError;
use crate::status::services::StatusServiceError;
use crate::task::services::TaskLifecycleError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use tracing::error;

const INTERNAL_MESSAGE: &str = "internal server error";

/// Error returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorKind,
    message: &'a str,
}

impl ApiError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a `401` error.
    #[must_use]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Returns the classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AccessDenied => StatusCode::FORBIDDEN,
            ErrorKind::InvalidReference | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classifies a service error, hiding internal details from the client.
    fn classify(kind: ErrorKind, err: &impl fmt::Display) -> Self {
        if kind == ErrorKind::Internal {
            error!(error = %err, "request failed");
            return Self::new(kind, INTERNAL_MESSAGE);
        }
        Self::new(kind, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<UserDirectoryError> for ApiError {
    fn from(err: UserDirectoryError) -> Self {
        Self::classify(err.kind(), &err)
    }
}

impl From<StatusServiceError> for ApiError {
    fn from(err: StatusServiceError) -> Self {
        Self::classify(err.kind(), &err)
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        Self::classify(err.kind(), &err)
    }
}

impl From<MessageThreadError> for ApiError {
    fn from(err: MessageThreadError) -> Self {
        Self::classify(err.kind(), &err)
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self::classify(ErrorKind::Internal, &err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(ErrorKind::Validation, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(ErrorKind::Validation, rejection.body_text())
    }
}
