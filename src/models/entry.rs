// ============================================================================
// Schedule Entry Model & JSON Parsing
// ============================================================================
//
// A schedule entry is the persisted recurring unit: room/class/teacher plus a
// weekly day set and a time-of-day range. The wire format coming from the
// admin frontend is lenient (single `day_of_week` or a `days` array, times
// with or without seconds); parsing normalizes everything here before the
// rest of the crate sees it.

use crate::api::{ClassGroupId, RoomId, ScheduleEntryId, SubjectId, TeacherId};
use crate::models::time::{self, DaySet};
use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Category tag for a schedule entry. Descriptive only; conflict detection
/// never looks at it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Lecture,
    Lab,
    Exam,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Lecture => write!(f, "lecture"),
            EntryKind::Lab => write!(f, "lab"),
            EntryKind::Exam => write!(f, "exam"),
        }
    }
}

/// Validation failure for a malformed schedule entry.
///
/// Raised by `validate` (and therefore by the expander) before any occurrence
/// is emitted; never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidScheduleEntry {
    #[error("entry {entry}: end time {end} is not after start time {start}")]
    InvalidTimeRange {
        entry: String,
        start: NaiveTime,
        end: NaiveTime,
    },
    #[error("entry {entry}: day set is empty")]
    EmptyDaySet { entry: String },
}

/// A weekly-recurring room/class/teacher time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unset until the entry has been persisted.
    pub id: Option<ScheduleEntryId>,
    pub room_id: RoomId,
    pub class_id: ClassGroupId,
    pub teacher_id: TeacherId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<SubjectId>,
    pub days: DaySet,
    #[serde(with = "time::time_of_day_format")]
    pub start_time: NaiveTime,
    #[serde(with = "time::time_of_day_format")]
    pub end_time: NaiveTime,
    #[serde(default, rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ScheduleEntry {
    /// Label used in error messages; unsaved entries have no id yet.
    fn label(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => "(unsaved)".to_string(),
        }
    }

    /// Check the entry invariants: `start_time < end_time` and a non-empty
    /// day set. Overnight ranges are rejected rather than wrapped past
    /// midnight.
    pub fn validate(&self) -> std::result::Result<(), InvalidScheduleEntry> {
        if self.end_time <= self.start_time {
            return Err(InvalidScheduleEntry::InvalidTimeRange {
                entry: self.label(),
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.days.is_empty() {
            return Err(InvalidScheduleEntry::EmptyDaySet {
                entry: self.label(),
            });
        }
        Ok(())
    }

    /// Time ranges overlap under half-open semantics: touching endpoints do
    /// not overlap.
    pub fn overlaps_time(&self, other: &ScheduleEntry) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

// Wire-shape input: accepts either `day_of_week` (single value, as the edit
// form sends) or `days` (array, as the creation form sends).
#[derive(Deserialize)]
struct EntryInput {
    pub id: Option<i64>,
    pub room_id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    #[serde(default)]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub days: Option<Vec<String>>,
    #[serde(default)]
    pub day_of_week: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub description: Option<String>,
}

impl EntryInput {
    fn into_entry(self) -> Result<ScheduleEntry> {
        let mut days = DaySet::empty();
        if let Some(names) = &self.days {
            for name in names {
                days.insert(time::weekday_from_name(name)?);
            }
        }
        if let Some(name) = &self.day_of_week {
            days.insert(time::weekday_from_name(name)?);
        }

        let entry = ScheduleEntry {
            id: self.id.map(ScheduleEntryId::new),
            room_id: RoomId::new(self.room_id),
            class_id: ClassGroupId::new(self.class_id),
            teacher_id: TeacherId::new(self.teacher_id),
            subject_id: self.subject_id.map(SubjectId::new),
            days,
            start_time: time::parse_time_of_day(&self.start_time)?,
            end_time: time::parse_time_of_day(&self.end_time)?,
            kind: self.kind,
            description: self.description,
        };
        entry.validate()?;
        Ok(entry)
    }
}

/// Parse one schedule entry from its wire JSON form and validate it.
///
/// This is the single entry point for data arriving from the admin frontend;
/// everything downstream works with the normalized [`ScheduleEntry`].
pub fn parse_entry_json_str(json: &str) -> Result<ScheduleEntry> {
    let input: EntryInput =
        serde_json::from_str(json).context("Failed to deserialize schedule entry JSON")?;
    input.into_entry()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn sample_entry() -> ScheduleEntry {
        ScheduleEntry {
            id: Some(ScheduleEntryId::new(1)),
            room_id: RoomId::new(101),
            class_id: ClassGroupId::new(5),
            teacher_id: TeacherId::new(12),
            subject_id: Some(SubjectId::new(3)),
            days: DaySet::from_days([Weekday::Mon, Weekday::Wed]),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            kind: EntryKind::Lecture,
            description: None,
        }
    }

    #[test]
    fn test_parse_with_days_array() {
        let json = r#"{
            "room_id": 101,
            "class_id": 5,
            "teacher_id": 12,
            "subject_id": 3,
            "days": ["monday", "wednesday"],
            "start_time": "08:00",
            "end_time": "09:00",
            "type": "lecture"
        }"#;

        let entry = parse_entry_json_str(json).expect("should parse days array form");
        assert_eq!(entry.room_id.value(), 101);
        assert_eq!(entry.days.len(), 2);
        assert!(entry.days.contains(Weekday::Wed));
        assert_eq!(entry.kind, EntryKind::Lecture);
    }

    #[test]
    fn test_parse_with_single_day_of_week() {
        let json = r#"{
            "id": 7,
            "room_id": 2,
            "class_id": 1,
            "teacher_id": 4,
            "day_of_week": "friday",
            "start_time": "13:30:00",
            "end_time": "15:00:00"
        }"#;

        let entry = parse_entry_json_str(json).expect("should parse day_of_week form");
        assert_eq!(entry.id, Some(ScheduleEntryId::new(7)));
        assert_eq!(entry.days.len(), 1);
        assert!(entry.days.contains(Weekday::Fri));
        assert_eq!(entry.subject_id, None);
        assert_eq!(entry.kind, EntryKind::Lecture, "kind defaults to lecture");
    }

    #[test]
    fn test_parse_rejects_missing_days() {
        let json = r#"{
            "room_id": 2,
            "class_id": 1,
            "teacher_id": 4,
            "start_time": "08:00",
            "end_time": "09:00"
        }"#;
        assert!(parse_entry_json_str(json).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_time() {
        let json = r#"{
            "room_id": 2,
            "class_id": 1,
            "teacher_id": 4,
            "day_of_week": "monday",
            "start_time": "late",
            "end_time": "09:00"
        }"#;
        assert!(parse_entry_json_str(json).is_err());
    }

    #[test]
    fn test_parse_rejects_inverted_range() {
        let json = r#"{
            "room_id": 2,
            "class_id": 1,
            "teacher_id": 4,
            "day_of_week": "monday",
            "start_time": "10:00",
            "end_time": "09:00"
        }"#;
        assert!(parse_entry_json_str(json).is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_entry_json_str("not valid json {").is_err());
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_entry().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_length_range() {
        let mut entry = sample_entry();
        entry.end_time = entry.start_time;
        match entry.validate() {
            Err(InvalidScheduleEntry::InvalidTimeRange { .. }) => {}
            other => panic!("expected InvalidTimeRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_days() {
        let mut entry = sample_entry();
        entry.days = DaySet::empty();
        match entry.validate() {
            Err(InvalidScheduleEntry::EmptyDaySet { .. }) => {}
            other => panic!("expected EmptyDaySet, got {:?}", other),
        }
    }

    #[test]
    fn test_overlaps_time_touching_endpoints() {
        let a = sample_entry();
        let mut b = sample_entry();
        b.start_time = a.end_time;
        b.end_time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        assert!(!a.overlaps_time(&b), "touching endpoints must not overlap");
        assert!(!b.overlaps_time(&a));
    }

    #[test]
    fn test_entry_serde_roundtrip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: ScheduleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
