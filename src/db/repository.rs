//! Repository trait and error types for schedule entry storage.

use crate::api::ScheduleEntryId;
use crate::models::ScheduleEntry;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The requested entry does not exist.
    #[error("Schedule entry {0} not found")]
    NotFound(ScheduleEntryId),

    /// An update referenced an entry with no persisted id.
    #[error("Entry has no id: {details}")]
    MissingId { details: String },

    /// Backend storage failure.
    #[error("Storage error during {operation}: {message}")]
    Storage { operation: String, message: String },
}

impl RepositoryError {
    pub fn storage(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RepositoryError::Storage {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// True when retrying the operation could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::Storage { .. })
    }
}

/// Abstract interface over schedule entry storage.
///
/// The conflict core never touches this: callers fetch the entry set first
/// and pass it in. Only the service layer and HTTP handlers depend on the
/// trait, so storage backends can be swapped without touching the domain.
#[async_trait::async_trait]
pub trait EntryRepository: Send + Sync {
    /// All stored entries, in unspecified order.
    async fn list_entries(&self) -> RepositoryResult<Vec<ScheduleEntry>>;

    async fn get_entry(&self, id: ScheduleEntryId) -> RepositoryResult<ScheduleEntry>;

    /// Persist a new entry, assigning its id. Returns the stored entry.
    async fn insert_entry(&self, entry: ScheduleEntry) -> RepositoryResult<ScheduleEntry>;

    /// Replace a stored entry; the entry must carry its persisted id.
    async fn update_entry(&self, entry: ScheduleEntry) -> RepositoryResult<ScheduleEntry>;

    async fn delete_entry(&self, id: ScheduleEntryId) -> RepositoryResult<()>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RepositoryError::NotFound(ScheduleEntryId::new(42));
        assert_eq!(err.to_string(), "Schedule entry 42 not found");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_storage_error_display_and_retryable() {
        let err = RepositoryError::storage("insert_entry", "disk full");
        assert!(err.to_string().contains("insert_entry"));
        assert!(err.to_string().contains("disk full"));
        assert!(err.is_retryable());
    }
}
