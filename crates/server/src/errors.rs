use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Problem-style error body: `{"status", "title", "detail"}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), title = self.title, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({
            "status": self.status.as_u16(),
            "title": self.title,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let detail = Some(err.detail());
        match err {
            ServiceError::BadRequest(_) => ApiError::new(StatusCode::BAD_REQUEST, "Bad Request", detail),
            ServiceError::Model(_) => ApiError::new(StatusCode::BAD_REQUEST, "Validation Error", detail),
            ServiceError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, "Not Found", detail),
            ServiceError::Conflict(_) => ApiError::new(StatusCode::CONFLICT, "Conflict", detail),
            ServiceError::Concurrency(_) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Concurrency Conflict", detail),
            ServiceError::Unavailable(_) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Store Unavailable", detail),
            ServiceError::Db(_) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database Error", detail),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
