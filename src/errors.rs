use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::booking::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid booking: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
