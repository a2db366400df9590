use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while preparing the server, before any request is handled.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Seed file {path} is not a valid race list: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Seed data contains race id {0} more than once")]
    DuplicateId(u64),
}

/// Errors a request handler can answer with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IDs should be numerical values. Invalid ID received: {0}")]
    InvalidId(String),
    #[error("Resource not found: {0}")]
    NotFound(u64),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidId(_) => {
                tracing::debug!(error = %self, "Rejected request.");
                (StatusCode::BAD_REQUEST, Json(json!(self.to_string()))).into_response()
            }
            AppError::NotFound(id) => {
                let body = Json(json!({ "id": id, "message": "Resource not found." }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}
