//! Conflict detection over occurrences and over entries at save time.

use crate::api::ScheduleEntryId;
use crate::models::{weekday_name, DaySet, ScheduleEntry};
use crate::scheduler::expand::Occurrence;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A resource two schedule entries can both claim for the same time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContendedResource {
    Room,
    Class,
    Teacher,
}

impl std::fmt::Display for ContendedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContendedResource::Room => write!(f, "room"),
            ContendedResource::Class => write!(f, "class"),
            ContendedResource::Teacher => write!(f, "teacher"),
        }
    }
}

/// A detected overlap between two occurrences or two entries.
///
/// Occurrence-level pairs carry the concrete `date`; save-time entry-level
/// pairs carry the shared `days` on which the entries collide. A pair lists
/// every contended resource, not only the first one found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ScheduleEntryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<ScheduleEntryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "DaySet::is_empty")]
    pub days: DaySet,
    pub resources: Vec<ContendedResource>,
    pub description: String,
}

impl ConflictPair {
    /// Days on which this pair collides, for the day-keyed wire shape. An
    /// occurrence-level pair maps to the weekday of its date.
    pub fn conflicting_days(&self) -> Vec<chrono::Weekday> {
        use chrono::Datelike;
        match self.date {
            Some(date) => vec![date.weekday()],
            None => self.days.iter().collect(),
        }
    }
}

fn resource_names(resources: &[ContendedResource]) -> String {
    resources
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

fn shared_resources(a: &Occurrence, b: &Occurrence) -> Vec<ContendedResource> {
    let mut resources = Vec::new();
    if a.room_id == b.room_id {
        resources.push(ContendedResource::Room);
    }
    if a.class_id == b.class_id {
        resources.push(ContendedResource::Class);
    }
    if a.teacher_id == b.teacher_id {
        resources.push(ContendedResource::Teacher);
    }
    resources
}

fn shared_entry_resources(a: &ScheduleEntry, b: &ScheduleEntry) -> Vec<ContendedResource> {
    let mut resources = Vec::new();
    if a.room_id == b.room_id {
        resources.push(ContendedResource::Room);
    }
    if a.class_id == b.class_id {
        resources.push(ContendedResource::Class);
    }
    if a.teacher_id == b.teacher_id {
        resources.push(ContendedResource::Teacher);
    }
    resources
}

// Half-open interval semantics: an occurrence ending exactly when another
// starts does not overlap it.
fn overlaps(a: &Occurrence, b: &Occurrence) -> bool {
    a.start < b.end && b.start < a.end
}

// Two occurrences of the same entry never conflict with each other, even if
// the entry appears twice in the input under the same id.
fn same_entry(a: &Occurrence, b: &Occurrence) -> bool {
    if a.entry_index == b.entry_index {
        return true;
    }
    matches!((a.entry_id, b.entry_id), (Some(x), Some(y)) if x == y)
}

/// Report every unordered pair of occurrences that overlap in time while
/// sharing at least one resource. Each pair appears exactly once.
///
/// Assumes validated input (the expander has already rejected malformed
/// entries); never fails, and an empty slice yields an empty result.
/// Pairwise O(n²), fine at school scale.
pub fn detect_conflicts(occurrences: &[Occurrence]) -> Vec<ConflictPair> {
    let mut conflicts = Vec::new();
    for i in 0..occurrences.len() {
        for j in (i + 1)..occurrences.len() {
            let (a, b) = (&occurrences[i], &occurrences[j]);
            if same_entry(a, b) || !overlaps(a, b) {
                continue;
            }
            let resources = shared_resources(a, b);
            if resources.is_empty() {
                continue;
            }
            let description = format!(
                "{} contention on {}: {} and {} both occupy {}-{}",
                resource_names(&resources),
                a.date,
                a.entry_id.map(|id| id.to_string()).unwrap_or_else(|| "a proposed entry".into()),
                b.entry_id.map(|id| id.to_string()).unwrap_or_else(|| "a proposed entry".into()),
                a.start.max(b.start).time().format("%H:%M"),
                a.end.min(b.end).time().format("%H:%M"),
            );
            conflicts.push(ConflictPair {
                first: a.entry_id,
                second: b.entry_id,
                date: Some(a.date),
                days: DaySet::empty(),
                resources,
                description,
            });
        }
    }
    conflicts
}

/// Save-time conflict check for a candidate entry against the stored set.
///
/// Entries are compared directly, without expansion: two entries conflict on
/// the days their day sets share when their time ranges overlap and they
/// contend for a resource. The candidate is never compared against itself
/// (same persisted id), so updates can be re-checked in place.
pub fn would_conflict(candidate: &ScheduleEntry, existing: &[ScheduleEntry]) -> Vec<ConflictPair> {
    let mut conflicts = Vec::new();
    for other in existing {
        if let (Some(a), Some(b)) = (candidate.id, other.id) {
            if a == b {
                continue;
            }
        }
        let shared_days = candidate.days.intersection(&other.days);
        if shared_days.is_empty() || !candidate.overlaps_time(other) {
            continue;
        }
        let resources = shared_entry_resources(candidate, other);
        if resources.is_empty() {
            continue;
        }
        let day_names: Vec<&str> = shared_days.iter().map(weekday_name).collect();
        let description = format!(
            "{} contention with entry {} on {}: {}-{} overlaps {}-{}",
            resource_names(&resources),
            other.id.map(|id| id.to_string()).unwrap_or_else(|| "(unsaved)".into()),
            day_names.join(", "),
            candidate.start_time.format("%H:%M"),
            candidate.end_time.format("%H:%M"),
            other.start_time.format("%H:%M"),
            other.end_time.format("%H:%M"),
        );
        conflicts.push(ConflictPair {
            first: candidate.id,
            second: other.id,
            date: None,
            days: shared_days,
            resources,
            description,
        });
    }
    conflicts
}
