//! Service layer for business logic and orchestration.
//!
//! Services sit between storage and the HTTP layer: the admission gate that
//! fronts every save, and the calendar view assembly that feeds the weekly
//! scheduling UI.

pub mod admission;
pub mod calendar;

pub use admission::{admit_entry, check_entry, AdmissionOutcome};
pub use calendar::{calendar_view, CalendarView};

use crate::db::RepositoryError;
use crate::models::InvalidScheduleEntry;

/// Error type for service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The caller supplied a malformed entry; not retried.
    #[error(transparent)]
    Invalid(#[from] InvalidScheduleEntry),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
