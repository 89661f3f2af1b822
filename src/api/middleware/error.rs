use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// A required table is missing from the backing store. Reported to the
    /// caller as 404 with a distinct message instead of crashing the request.
    Configuration(String),
    /// A row changed under a concurrent writer between read and commit.
    /// Deliberately unresolved: surfaces as a server fault for the caller to retry.
    Concurrency(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Configuration(msg) => write!(f, "Store not configured: {}", msg),
            ApiError::Concurrency(msg) => write!(f, "Concurrency conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Configuration(msg) => (
                StatusCode::NOT_FOUND,
                format!("Store not configured: {}", msg),
            ),
            ApiError::Concurrency(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Concurrency conflict: {}", msg),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// Convert from sqlx errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                if message.contains("UNIQUE")
                    || message.contains("unique")
                    || message.contains("Duplicate entry")
                {
                    ApiError::Conflict("A record with this key already exists".to_string())
                } else if message.contains("no such table")
                    || message.contains("does not exist")
                    || message.contains("doesn't exist")
                {
                    // SQLite, Postgres and MySQL each word the missing-table error differently.
                    ApiError::Configuration(message.to_string())
                } else {
                    ApiError::Internal(format!("Database error: {}", message))
                }
            }
            _ => ApiError::Internal("Internal server error".to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
