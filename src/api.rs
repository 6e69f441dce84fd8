//! Public API surface for the timetabling backend.
//!
//! This file consolidates the identifier newtypes and cross-cutting request
//! context used throughout the crate. All types derive Serialize/Deserialize
//! for JSON serialization.

use serde::{Deserialize, Serialize};

/// Defines a newtype ID wrapper around an `i64` scalar and generates the
/// derives, `Display`, `From` conversions and `new`/`value` accessors shared
/// by every identifier in the API.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                $name(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ScheduleEntryId);
define_id!(RoomId);
define_id!(ClassGroupId);
define_id!(TeacherId);
define_id!(SubjectId);

/// Role of the acting user, as reported by the (external) auth layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Admin,
    Registrar,
    Teacher,
}

/// Identity of the user performing an operation.
///
/// Session handling is owned by an external collaborator; handlers receive
/// the resolved identity explicitly instead of reading ambient global state,
/// and services use it only to tag logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorContext {
    pub user_id: i64,
    pub role: ActorRole,
}

impl ActorContext {
    pub fn new(user_id: i64, role: ActorRole) -> Self {
        Self { user_id, role }
    }

    /// Fallback identity for unauthenticated calls (the auth collaborator is
    /// out of scope; dev deployments run without it).
    pub fn anonymous() -> Self {
        Self {
            user_id: 0,
            role: ActorRole::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_new_and_value() {
        let id = ScheduleEntryId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(RoomId::new(7).value(), 7);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TeacherId::new(13).to_string(), "13");
    }

    #[test]
    fn test_id_conversions() {
        let id: ClassGroupId = 5.into();
        let raw: i64 = id.into();
        assert_eq!(raw, 5);
    }

    #[test]
    fn test_id_equality_and_ordering() {
        assert_eq!(SubjectId::new(3), SubjectId::new(3));
        assert!(ScheduleEntryId::new(1) < ScheduleEntryId::new(2));
    }

    #[test]
    fn test_actor_roundtrip() {
        let actor = ActorContext::new(9, ActorRole::Registrar);
        let json = serde_json::to_string(&actor).unwrap();
        let back: ActorContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back.user_id, 9);
        assert_eq!(back.role, ActorRole::Registrar);
    }

    #[test]
    fn test_anonymous_actor() {
        let actor = ActorContext::anonymous();
        assert_eq!(actor.user_id, 0);
        assert_eq!(actor.role, ActorRole::Admin);
    }
}
