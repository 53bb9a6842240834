use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
    #[error("Slot conflict: {0}")]
    SlotConflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    // 23505 = PostgreSQL Unique Violation
                    // The only unique index besides the PK is the approved-slot guard.
                    if code == "2067" || code == "23505" {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({ "kind": "slot_conflict", "error": "Slot already has an approved reservation" }))
                        ).into_response();
                    }
                }

                error!("Database error: {:?}", e);

                match e {
                    sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::PoolClosed => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "store_unavailable",
                        "Storage backend unavailable".to_string(),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "database",
                        "Internal server error".to_string(),
                    ),
                }
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", "Unauthorized".to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::InvalidTransition(msg) => (StatusCode::CONFLICT, "invalid_transition", msg.clone()),
            AppError::SlotConflict(msg) => (StatusCode::CONFLICT, "slot_conflict", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation", msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal", "Internal error".to_string()),
        };

        let body = Json(json!({
            "kind": kind,
            "error": message
        }));

        (status, body).into_response()
    }
}
