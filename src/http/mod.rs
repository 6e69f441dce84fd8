//! HTTP server module for the timetabling backend.
//!
//! An axum-based REST API over the service layer. The handlers only parse
//! and serialize; admission and calendar assembly live in
//! [`crate::services`], storage behind [`crate::db::EntryRepository`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
