use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Page render failed: {0}")]
    Render(String),

    #[error("SEO analysis failed: {0}")]
    Ai(String),

    /// Non-200 from a proxied upstream (PageSpeed). The upstream status code
    /// is forwarded to the caller unchanged.
    #[error("Upstream error ({status}): {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Render(msg) => {
                tracing::error!("Page render failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Page render failed: {msg}"),
                )
            }
            AppError::Ai(msg) => {
                tracing::error!("SEO analysis failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("SEO analysis failed: {msg}"),
                )
            }
            AppError::Upstream { status, body } => {
                tracing::warn!(status = %status, "Upstream returned an error");
                (status, body)
            }
            AppError::Internal => {
                tracing::error!("Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
