//! Occurrence expansion: recurring entries to concrete calendar intervals.

use crate::api::{ClassGroupId, RoomId, ScheduleEntryId, TeacherId};
use crate::models::{InvalidScheduleEntry, ScheduleEntry};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One concrete calendar-dated instance of a recurring schedule entry.
///
/// Occurrences are derived on every view change and never persisted; they
/// are owned by the expansion call that produced them. Resource ids are
/// copied from the source entry so the conflict detector can compare
/// occurrences without looking entries up again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    /// Position of the source entry in the slice passed to [`expand`].
    /// Provenance for self-exclusion; not part of the wire format.
    #[serde(skip_serializing)]
    pub entry_index: usize,
    /// Back-reference to the source entry, when it has been persisted.
    pub entry_id: Option<ScheduleEntryId>,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub room_id: RoomId,
    pub class_id: ClassGroupId,
    pub teacher_id: TeacherId,
}

/// Expand recurring entries into occurrences for the inclusive window
/// `[window_start, window_end]`.
///
/// For each date in the window, every entry recurring on that weekday emits
/// one occurrence with the entry's time range bound to that date. All
/// entries are validated up front: a malformed entry (inverted time range,
/// empty day set) fails the whole call instead of silently producing
/// zero-length or midnight-wrapping occurrences.
///
/// Occurrences of one entry come out in ascending date order; no ordering
/// across entries is guaranteed. An empty window (`window_end` before
/// `window_start`) yields an empty result.
pub fn expand(
    entries: &[ScheduleEntry],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<Vec<Occurrence>, InvalidScheduleEntry> {
    for entry in entries {
        entry.validate()?;
    }

    let mut occurrences = Vec::new();
    for (entry_index, entry) in entries.iter().enumerate() {
        for date in window_start
            .iter_days()
            .take_while(|d| *d <= window_end)
        {
            if !entry.days.contains(date.weekday()) {
                continue;
            }
            occurrences.push(Occurrence {
                entry_index,
                entry_id: entry.id,
                date,
                start: date.and_time(entry.start_time),
                end: date.and_time(entry.end_time),
                room_id: entry.room_id,
                class_id: entry.class_id,
                teacher_id: entry.teacher_id,
            });
        }
    }
    Ok(occurrences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClassGroupId, RoomId, SubjectId, TeacherId};
    use crate::models::{DaySet, EntryKind};
    use chrono::{NaiveTime, Weekday};

    fn entry(id: i64, days: &[Weekday], start: (u32, u32), end: (u32, u32)) -> ScheduleEntry {
        ScheduleEntry {
            id: Some(ScheduleEntryId::new(id)),
            room_id: RoomId::new(1),
            class_id: ClassGroupId::new(1),
            teacher_id: TeacherId::new(1),
            subject_id: Some(SubjectId::new(1)),
            days: DaySet::from_days(days.iter().copied()),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            kind: EntryKind::Lecture,
            description: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-01-01 is a Monday.
    const WEEK_START: (i32, u32, u32) = (2024, 1, 1);

    fn week_window() -> (NaiveDate, NaiveDate) {
        let start = date(WEEK_START.0, WEEK_START.1, WEEK_START.2);
        (start, start + chrono::Days::new(6))
    }

    #[test]
    fn test_expand_single_day_in_week() {
        let entries = vec![entry(1, &[Weekday::Mon], (8, 0), (9, 0))];
        let (start, end) = week_window();

        let occurrences = expand(&entries, start, end).unwrap();
        assert_eq!(occurrences.len(), 1);
        let occ = &occurrences[0];
        assert_eq!(occ.date, date(2024, 1, 1));
        assert_eq!(occ.start, date(2024, 1, 1).and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(occ.end, date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(occ.entry_id, Some(ScheduleEntryId::new(1)));
    }

    #[test]
    fn test_expand_multi_day_over_month_grid() {
        // A 5-week month grid: Mon+Wed entry appears twice per week.
        let entries = vec![entry(1, &[Weekday::Mon, Weekday::Wed], (8, 0), (9, 0))];
        let start = date(2024, 1, 1);
        let end = date(2024, 2, 4); // 35 days, 5 Mondays + 5 Wednesdays

        let occurrences = expand(&entries, start, end).unwrap();
        assert_eq!(occurrences.len(), 10);
        // Ascending date order within the entry.
        for pair in occurrences.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_expand_empty_inputs() {
        let (start, end) = week_window();
        assert!(expand(&[], start, end).unwrap().is_empty());

        // Inverted window yields nothing.
        let entries = vec![entry(1, &[Weekday::Mon], (8, 0), (9, 0))];
        assert!(expand(&entries, end, start).unwrap().is_empty());
    }

    #[test]
    fn test_expand_single_day_window() {
        let entries = vec![
            entry(1, &[Weekday::Mon], (8, 0), (9, 0)),
            entry(2, &[Weekday::Tue], (8, 0), (9, 0)),
        ];
        let monday = date(2024, 1, 1);

        let occurrences = expand(&entries, monday, monday).unwrap();
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].entry_id, Some(ScheduleEntryId::new(1)));
    }

    #[test]
    fn test_expand_rejects_malformed_entry() {
        let mut bad = entry(1, &[Weekday::Mon], (9, 0), (8, 0));
        bad.id = Some(ScheduleEntryId::new(99));
        let (start, end) = week_window();

        let err = expand(&[bad], start, end).unwrap_err();
        assert!(matches!(err, InvalidScheduleEntry::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_expand_rejects_empty_day_set() {
        let mut bad = entry(1, &[Weekday::Mon], (8, 0), (9, 0));
        bad.days = DaySet::empty();
        let (start, end) = week_window();

        let err = expand(&[bad], start, end).unwrap_err();
        assert!(matches!(err, InvalidScheduleEntry::EmptyDaySet { .. }));
    }

    #[test]
    fn test_expand_is_deterministic() {
        let entries = vec![
            entry(1, &[Weekday::Mon, Weekday::Fri], (8, 0), (10, 0)),
            entry(2, &[Weekday::Wed], (11, 30), (12, 15)),
        ];
        let (start, end) = week_window();

        let first = expand(&entries, start, end).unwrap();
        let second = expand(&entries, start, end).unwrap();
        assert_eq!(first, second);
    }
}
