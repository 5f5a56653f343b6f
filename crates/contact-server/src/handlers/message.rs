//! Test-message handler

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

/// Fixed confirmation payload, useful as a quick liveness probe from the
/// frontend.
pub async fn message() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Contact service is up and running",
    })
}
