//! Calendar view assembly: expanded occurrences plus their conflicts.

use crate::db::{services as db_services, EntryRepository};
use crate::scheduler::{detect_conflicts, expand, ConflictPair, Occurrence};
use crate::services::ServiceError;
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the weekly/monthly calendar UI needs for one display window.
#[derive(Debug, Serialize)]
pub struct CalendarView {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub occurrences: Vec<Occurrence>,
    /// Conflicts among the displayed occurrences, shown as warnings on the
    /// calendar rather than blocking anything.
    pub conflicts: Vec<ConflictPair>,
}

/// Fetch the stored entries and expand them over `[window_start, window_end]`,
/// reporting the conflicts among the resulting occurrences.
pub async fn calendar_view(
    repo: &dyn EntryRepository,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<CalendarView, ServiceError> {
    let entries = db_services::list_entries(repo).await?;
    let occurrences = expand(&entries, window_start, window_end)?;
    let conflicts = detect_conflicts(&occurrences);
    Ok(CalendarView {
        window_start,
        window_end,
        occurrences,
        conflicts,
    })
}
