//! Storage module for schedule entries.
//!
//! Follows the repository pattern: an abstract [`repository::EntryRepository`]
//! trait, an in-memory [`local::LocalRepository`] implementation, and a small
//! service layer of free functions that work with any implementation.
//!
//! Persistence backends beyond in-memory are owned by an external
//! collaborator (the generic table backend of the admin application); this
//! crate only needs storage it can hand to the conflict gate and the
//! calendar view.

pub mod local;
pub mod repository;
pub mod services;

pub use local::LocalRepository;
pub use repository::{EntryRepository, RepositoryError, RepositoryResult};
