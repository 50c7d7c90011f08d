use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorResponse, errors::messages};
use thiserror::Error;

/// Uniqueness conflicts raised by the user store.
///
/// Both variants carry the value exactly as it was submitted so callers can
/// echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("A user with email '{0}' already exists.")]
    DuplicateEmail(String),

    #[error("A user with username '{0}' already exists.")]
    DuplicateUsername(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::warn!(error = %message, "Rejected user creation");

        let body = ErrorResponse::new(messages::CODE_CONFLICT, "Conflict", message);
        (StatusCode::CONFLICT, Json(body)).into_response()
    }
}
