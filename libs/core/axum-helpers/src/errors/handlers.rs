use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        messages::CODE_NOT_FOUND,
        "NotFound",
        messages::NOT_FOUND_RESOURCE,
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
