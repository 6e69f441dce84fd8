//! High-level storage functions over any [`EntryRepository`].
//!
//! Thin orchestration only; conflict admission lives in
//! [`crate::services::admission`], which calls through here once a proposal
//! has passed the gate.

use crate::api::ScheduleEntryId;
use crate::db::repository::{EntryRepository, RepositoryResult};
use crate::models::ScheduleEntry;

pub async fn list_entries(repo: &dyn EntryRepository) -> RepositoryResult<Vec<ScheduleEntry>> {
    repo.list_entries().await
}

pub async fn get_entry(
    repo: &dyn EntryRepository,
    id: ScheduleEntryId,
) -> RepositoryResult<ScheduleEntry> {
    repo.get_entry(id).await
}

pub async fn store_entry(
    repo: &dyn EntryRepository,
    entry: ScheduleEntry,
) -> RepositoryResult<ScheduleEntry> {
    repo.insert_entry(entry).await
}

pub async fn delete_entry(repo: &dyn EntryRepository, id: ScheduleEntryId) -> RepositoryResult<()> {
    repo.delete_entry(id).await
}

pub async fn health_check(repo: &dyn EntryRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
