//! Schedule expansion and conflict detection.
//!
//! The two coupled pieces of real domain logic in the system:
//!
//! - [`expand`]: turns weekly recurring entries into concrete date-bound
//!   occurrences for a display window.
//! - [`detect_conflicts`] / [`would_conflict`]: report every unordered pair
//!   of occurrences (or entries, at save time) that overlap in time while
//!   sharing a contended resource.
//!
//! Both are pure, synchronous functions over caller-supplied slices; nothing
//! here touches a repository or performs I/O.

pub mod conflict;
pub mod expand;

pub use conflict::{detect_conflicts, would_conflict, ConflictPair, ContendedResource};
pub use expand::{expand, Occurrence};
