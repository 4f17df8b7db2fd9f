// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// Every read-path failure is reported to the client the same way; the cause only goes to the log.
#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::DatabaseError(e) => tracing::error!(error = %e, "Database error occurred"),
        }

        let body = Json(json!({
            "error": "Internal Server Error",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}
