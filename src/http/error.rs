//! Mapping from registry errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorResponse;
use crate::registry::RegistryError;

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(reason) => (
                StatusCode::BAD_REQUEST,
                Json(
                    ErrorResponse::with_code("Invalid student payload", "INVALID_PAYLOAD")
                        .detail(reason),
                ),
            )
                .into_response(),
            Self::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::with_code("Not found", "NOT_FOUND")))
                    .into_response()
            }
        }
    }
}
