//! Application state for the HTTP server.

use crate::db::EntryRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for schedule entry storage
    pub repository: Arc<dyn EntryRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }
}
