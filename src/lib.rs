//! # STS Rust Backend
//!
//! Schedule conflict engine for a school administration system.
//!
//! This crate provides the scheduling core behind the weekly class calendar:
//! expansion of recurring schedule entries into concrete calendar
//! occurrences, and detection of conflicting pairs by contended resource
//! (room, class, or teacher). A REST API via Axum exposes the admission
//! gate and calendar view to the React frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and request context
//! - [`models`]: Schedule entry model, time-of-day and weekday handling
//! - [`scheduler`]: Occurrence expansion and conflict detection (pure)
//! - [`db`]: Repository pattern over schedule entry storage
//! - [`services`]: Admission gate and calendar view orchestration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Authentication, audit persistence, file upload, and the generic CRUD
//! table endpoints of the surrounding admin application are external
//! collaborators; this crate computes over data already fetched into
//! memory and holds no cross-request state of its own.

pub mod api;
pub mod db;
pub mod models;
pub mod scheduler;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
