use uuid::Uuid;

use crate::models::Person;

/// Wire value of a slot with no eligible person.
pub const UNASSIGNED: &str = "Unassigned";

/// Value of one schedule entry.
///
/// `Assigned` references a current roster member by id. `Stale` carries the
/// name of a person who has since been deleted: readers must tolerate it, the
/// counters ignore it, and it round-trips through the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Assigned(Uuid),
    Stale(String),
    Unassigned,
}

impl Assignment {
    /// Resolves the wire value to what the store persists.
    ///
    /// An assigned id whose person is gone from the roster falls back to the
    /// sentinel; deletion normally rewrites such entries to `Stale` first, so
    /// this is only reachable on a roster/schedule mismatch in the store.
    pub fn to_wire(&self, roster: &[Person]) -> String {
        match self {
            Assignment::Assigned(id) => roster
                .iter()
                .find(|p| p.id == *id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNASSIGNED.to_string()),
            Assignment::Stale(name) => name.clone(),
            Assignment::Unassigned => UNASSIGNED.to_string(),
        }
    }

    /// Parses a stored wire value against the current roster.
    pub fn from_wire(value: &str, roster: &[Person]) -> Self {
        if value == UNASSIGNED {
            return Assignment::Unassigned;
        }
        match roster.iter().find(|p| p.name == value) {
            Some(person) => Assignment::Assigned(person.id),
            None => Assignment::Stale(value.to_string()),
        }
    }

    /// The roster id this entry counts toward, if any.
    pub fn assigned_id(&self) -> Option<Uuid> {
        match self {
            Assignment::Assigned(id) => Some(*id),
            _ => None,
        }
    }
}
