//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic. The acting user is resolved from headers set by
//! the (external) auth proxy; without them, calls run as the anonymous
//! development identity.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};

use super::dto::{CalendarQuery, CheckResponse, EntryListResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ActorContext, ActorRole, ScheduleEntryId};
use crate::db::services as db_services;
use crate::models::{parse_entry_json_str, ScheduleEntry};
use crate::services::{self, AdmissionOutcome, CalendarView};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// Resolve the acting user from the auth proxy headers.
fn actor_from_headers(headers: &HeaderMap) -> ActorContext {
    let user_id = headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok());
    let role: Option<ActorRole> = headers
        .get("x-user-role")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| serde_json::from_value(serde_json::Value::String(s.to_string())).ok());
    match (user_id, role) {
        (Some(user_id), Some(role)) => ActorContext::new(user_id, role),
        (Some(user_id), None) => ActorContext::new(user_id, ActorRole::Registrar),
        _ => ActorContext::anonymous(),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Schedule Entries
// =============================================================================

/// GET /v1/entries
///
/// List all stored schedule entries.
pub async fn list_entries(State(state): State<AppState>) -> HandlerResult<EntryListResponse> {
    let entries = db_services::list_entries(state.repository.as_ref()).await?;
    let total = entries.len();
    Ok(Json(EntryListResponse { entries, total }))
}

/// GET /v1/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<ScheduleEntry> {
    let entry =
        db_services::get_entry(state.repository.as_ref(), ScheduleEntryId::new(id)).await?;
    Ok(Json(entry))
}

/// POST /v1/entries
///
/// Propose a new schedule entry. The body uses the lenient wire shape
/// (`days` array or single `day_of_week`, times with or without seconds).
/// Accepted proposals are persisted and returned with their new id (201);
/// conflicting proposals are rejected whole with 422 and the conflicts
/// keyed by day.
pub async fn create_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<(axum::http::StatusCode, Json<ScheduleEntry>), AppError> {
    let json = serde_json::to_string(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid entry JSON: {}", e)))?;
    let candidate =
        parse_entry_json_str(&json).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let actor = actor_from_headers(&headers);
    match services::admit_entry(state.repository.as_ref(), candidate, &actor).await? {
        AdmissionOutcome::Accepted(entry) => Ok((axum::http::StatusCode::CREATED, Json(entry))),
        AdmissionOutcome::Rejected(conflicts) => Err(AppError::ScheduleConflict(conflicts)),
    }
}

/// DELETE /v1/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::http::StatusCode, AppError> {
    db_services::delete_entry(state.repository.as_ref(), ScheduleEntryId::new(id)).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// POST /v1/entries/check
///
/// Dry-run conflict check for a proposal; never persists anything.
pub async fn check_entry(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> HandlerResult<CheckResponse> {
    let json = serde_json::to_string(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid entry JSON: {}", e)))?;
    let candidate =
        parse_entry_json_str(&json).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let conflicts = services::admission::check_entry(state.repository.as_ref(), &candidate).await?;
    Ok(Json(CheckResponse {
        conflict_free: conflicts.is_empty(),
        conflicts,
    }))
}

// =============================================================================
// Calendar
// =============================================================================

/// GET /v1/calendar?start=YYYY-MM-DD&end=YYYY-MM-DD
///
/// Expanded occurrences for the inclusive window, plus the conflicts among
/// them (displayed as warnings on the calendar view).
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> HandlerResult<CalendarView> {
    if query.end < query.start {
        return Err(AppError::BadRequest(format!(
            "Window end {} precedes start {}",
            query.end, query.start
        )));
    }
    let view =
        services::calendar_view(state.repository.as_ref(), query.start, query.end).await?;
    Ok(Json(view))
}
