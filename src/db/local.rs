//! In-memory repository for unit testing and local development.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::api::ScheduleEntryId;
use crate::db::repository::{EntryRepository, RepositoryError, RepositoryResult};
use crate::models::ScheduleEntry;

#[derive(Default)]
struct LocalState {
    entries: HashMap<i64, ScheduleEntry>,
    next_id: i64,
}

/// In-memory [`EntryRepository`] backed by a `RwLock`ed map.
///
/// Ids are assigned from a monotonically increasing counter and never
/// reused, matching how the real backend's autoincrement keys behave.
#[derive(Default)]
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LocalState {
                entries: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed the repository with already-identified entries (test fixtures).
    pub fn with_entries(entries: Vec<ScheduleEntry>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.write();
            for entry in entries {
                if let Some(id) = entry.id {
                    state.next_id = state.next_id.max(id.value() + 1);
                    state.entries.insert(id.value(), entry);
                }
            }
        }
        repo
    }
}

#[async_trait::async_trait]
impl EntryRepository for LocalRepository {
    async fn list_entries(&self) -> RepositoryResult<Vec<ScheduleEntry>> {
        Ok(self.state.read().entries.values().cloned().collect())
    }

    async fn get_entry(&self, id: ScheduleEntryId) -> RepositoryResult<ScheduleEntry> {
        self.state
            .read()
            .entries
            .get(&id.value())
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn insert_entry(&self, mut entry: ScheduleEntry) -> RepositoryResult<ScheduleEntry> {
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id += 1;
        entry.id = Some(ScheduleEntryId::new(id));
        state.entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update_entry(&self, entry: ScheduleEntry) -> RepositoryResult<ScheduleEntry> {
        let id = entry.id.ok_or_else(|| RepositoryError::MissingId {
            details: "update_entry requires a persisted entry".to_string(),
        })?;
        let mut state = self.state.write();
        if !state.entries.contains_key(&id.value()) {
            return Err(RepositoryError::NotFound(id));
        }
        state.entries.insert(id.value(), entry.clone());
        Ok(entry)
    }

    async fn delete_entry(&self, id: ScheduleEntryId) -> RepositoryResult<()> {
        let mut state = self.state.write();
        state
            .entries
            .remove(&id.value())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
