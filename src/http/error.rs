//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::RepositoryError;
use crate::scheduler::ConflictPair;
use crate::services::ServiceError;

use super::dto::conflicts_by_day;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Rejection body for a conflicting schedule proposal: HTTP 422 with the
/// conflicts keyed by day, each value a field-to-message map, plus the raw
/// pair list for clients that want structure.
#[derive(Debug, Serialize)]
pub struct ConflictResponse {
    pub code: String,
    pub message: String,
    pub conflicts: serde_json::Value,
    pub pairs: Vec<ConflictPair>,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Proposal rejected by the admission gate
    ScheduleConflict(Vec<ConflictPair>),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ApiError::new("NOT_FOUND", msg))).into_response()
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("BAD_REQUEST", msg)),
            )
                .into_response(),
            AppError::ScheduleConflict(pairs) => {
                let body = ConflictResponse {
                    code: "SCHEDULE_CONFLICT".to_string(),
                    message: format!("Proposal conflicts with {} existing entr{}",
                        pairs.len(),
                        if pairs.len() == 1 { "y" } else { "ies" }),
                    conflicts: conflicts_by_day(&pairs),
                    pairs,
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("INTERNAL_ERROR", msg)),
            )
                .into_response(),
            AppError::Repository(e) => match e {
                RepositoryError::NotFound(_) => (
                    StatusCode::NOT_FOUND,
                    Json(ApiError::new("NOT_FOUND", e.to_string())),
                )
                    .into_response(),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiError::new("REPOSITORY_ERROR", e.to_string())),
                )
                    .into_response(),
            },
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Invalid(e) => AppError::BadRequest(e.to_string()),
            ServiceError::Repository(e) => AppError::Repository(e),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
