//! Save-time admission gate for schedule proposals.
//!
//! A single-shot validation gate: a proposed entry is either accepted as a
//! whole and persisted, or rejected as a whole with the conflict list. A
//! multi-day proposal is never partially accepted; the rejection names the
//! specific days that collide so the caller can surface them per day.

use crate::api::ActorContext;
use crate::db::{services as db_services, EntryRepository};
use crate::models::ScheduleEntry;
use crate::scheduler::{would_conflict, ConflictPair};
use crate::services::ServiceError;
use tracing::{info, warn};

/// Outcome of running a proposal through the gate.
///
/// Conflicts are a normal result value, not an error: the gate only fails on
/// malformed input or storage trouble.
#[derive(Debug)]
pub enum AdmissionOutcome {
    /// No conflicts; the entry was persisted and carries its new id.
    Accepted(ScheduleEntry),
    /// One or more conflicts; nothing was persisted.
    Rejected(Vec<ConflictPair>),
}

/// Validate a candidate and check it against the stored set without
/// persisting anything (the "check" dry run used by the scheduling form).
pub async fn check_entry(
    repo: &dyn EntryRepository,
    candidate: &ScheduleEntry,
) -> Result<Vec<ConflictPair>, ServiceError> {
    candidate.validate()?;
    let existing = db_services::list_entries(repo).await?;
    Ok(would_conflict(candidate, &existing))
}

/// Run a proposal through the gate and persist it if no conflict is found.
pub async fn admit_entry(
    repo: &dyn EntryRepository,
    candidate: ScheduleEntry,
    actor: &ActorContext,
) -> Result<AdmissionOutcome, ServiceError> {
    let conflicts = check_entry(repo, &candidate).await?;
    if !conflicts.is_empty() {
        warn!(
            user_id = actor.user_id,
            conflicts = conflicts.len(),
            "schedule proposal rejected"
        );
        return Ok(AdmissionOutcome::Rejected(conflicts));
    }

    let stored = db_services::store_entry(repo, candidate).await?;
    info!(
        user_id = actor.user_id,
        entry_id = stored.id.map(|id| id.value()),
        "schedule entry accepted"
    );
    Ok(AdmissionOutcome::Accepted(stored))
}
