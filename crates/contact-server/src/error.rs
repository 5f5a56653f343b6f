//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to HTTP clients
///
/// Storage failures carry no detail here on purpose: the underlying error is
/// logged at the handler boundary and the client only ever sees the generic
/// message.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("All fields are required")]
    Validation,

    #[error("Server error")]
    Storage,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
