//! Data Transfer Objects for the HTTP API.
//!
//! The domain types (`ScheduleEntry`, `Occurrence`, `ConflictPair`) already
//! derive Serialize, so most responses embed them directly; this module adds
//! the envelopes and query types around them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ScheduleEntry;
use crate::scheduler::{ConflictPair, ContendedResource};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub repository: String,
}

/// Entry list response.
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub entries: Vec<ScheduleEntry>,
    pub total: usize,
}

/// Response for the dry-run conflict check.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub conflict_free: bool,
    pub conflicts: Vec<ConflictPair>,
}

/// Query parameters for the calendar endpoint; both dates are inclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn field_name(resource: ContendedResource) -> &'static str {
    match resource {
        ContendedResource::Room => "room_id",
        ContendedResource::Class => "class_id",
        ContendedResource::Teacher => "teacher_id",
    }
}

/// Flatten conflict pairs into the wire shape the admin frontend expects on
/// rejection: a map keyed by day name, each value a field-to-message map.
pub fn conflicts_by_day(pairs: &[ConflictPair]) -> serde_json::Value {
    let mut by_day: BTreeMap<&'static str, BTreeMap<&'static str, String>> = BTreeMap::new();
    for pair in pairs {
        for day in pair.conflicting_days() {
            let fields = by_day.entry(crate::models::weekday_name(day)).or_default();
            for resource in &pair.resources {
                fields.insert(field_name(*resource), pair.description.clone());
            }
        }
    }
    serde_json::to_value(by_day).unwrap_or(serde_json::Value::Null)
}
