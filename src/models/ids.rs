//! Typed record identifiers.
//!
//! Every table hands out sequential ids starting at 1, so iterating a table
//! by id is iterating it in insertion order.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A typed identifier of a stored record.
pub trait RecordId: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    /// Name of the record kind, used in error messages and logs.
    const ENTITY: &'static str;

    /// Wraps a raw numeric id.
    fn from_raw(raw: u64) -> Self;

    /// Returns the raw numeric id.
    fn raw(self) -> u64;
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl RecordId for $name {
            const ENTITY: &'static str = $entity;

            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifies a user account.
    UserId,
    "user"
);
record_id!(
    /// Identifies a person profile.
    PersonId,
    "person"
);
record_id!(
    /// Identifies an employment contract.
    ContractId,
    "contract"
);
record_id!(
    /// Identifies an absence.
    AbsenceId,
    "absence"
);
record_id!(
    /// Identifies a client.
    ClientId,
    "client"
);
record_id!(
    /// Identifies a project.
    ProjectId,
    "project"
);
record_id!(
    /// Identifies an allocation of a person to a project.
    AllocationId,
    "allocation"
);
record_id!(
    /// Identifies an activity.
    ActivityId,
    "activity"
);
record_id!(
    /// Identifies a time entry.
    TimeEntryId,
    "time entry"
);
record_id!(
    /// Identifies a note within its parent kind's note table.
    NoteId,
    "note"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip_and_display() {
        let id = ProjectId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.to_string(), "#42");
        assert_eq!(ProjectId::ENTITY, "project");
    }

    #[test]
    fn test_ids_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&PersonId::from_raw(3)).unwrap(), "3");
        let id: ClientId = serde_json::from_str("9").unwrap();
        assert_eq!(id, ClientId::from_raw(9));
    }

    #[test]
    fn test_ids_order_by_raw_value() {
        assert!(TimeEntryId::from_raw(2) < TimeEntryId::from_raw(10));
    }
}
