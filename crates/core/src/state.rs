//! The in-memory session state.
//!
//! One `RosterState` holds everything a client session works against: the
//! roster, the unavailability constraints, the holiday set, and the schedule
//! map. Operations in [`crate::ops`] mutate it in place and hand back the
//! change-set to synchronize with the store; nothing here does I/O.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    Assignment, ConstraintRecord, Person, Slot, SlotKey, StateSnapshot, UserRecord,
};

/// An unavailability constraint: this person cannot take this date+slot.
///
/// Duplicates are permitted; filtering is idempotent so they are harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub person_id: Uuid,
    pub date: NaiveDate,
    pub slot: Slot,
}

/// The session state object passed explicitly to every operation.
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    pub people: Vec<Person>,
    pub constraints: Vec<Constraint>,
    pub holidays: BTreeSet<NaiveDate>,
    pub schedule: BTreeMap<SlotKey, Assignment>,
}

impl RosterState {
    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }

    pub fn person_by_id(&self, id: Uuid) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Builds session state from a store snapshot.
    ///
    /// Fresh ids are minted for the roster; schedule values naming no current
    /// person become [`Assignment::Stale`] so they survive the next save
    /// unchanged. A constraint naming no current person has no id to attach
    /// to and is dropped — it could never affect an assignment anyway. A
    /// schedule key that fails to parse is dropped likewise.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Self {
        let people: Vec<Person> = snapshot
            .users
            .iter()
            .map(|u| Person::new(u.name.clone(), u.limit.max(1)))
            .collect();

        let constraints = snapshot
            .constraints
            .iter()
            .filter_map(|c| {
                let person = people.iter().find(|p| p.name == c.user)?;
                Some(Constraint {
                    person_id: person.id,
                    date: c.date,
                    slot: c.slot,
                })
            })
            .collect();

        let schedule = snapshot
            .schedule
            .iter()
            .filter_map(|(key, value)| {
                let key: SlotKey = key.parse().ok()?;
                Some((key, Assignment::from_wire(value, &people)))
            })
            .collect();

        Self {
            people,
            constraints,
            holidays: snapshot.holidays.iter().copied().collect(),
            schedule,
        }
    }

    /// Renders the session back into the wire shape the store persists.
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            users: self
                .people
                .iter()
                .map(|p| UserRecord {
                    name: p.name.clone(),
                    limit: p.limit,
                })
                .collect(),
            constraints: self
                .constraints
                .iter()
                .filter_map(|c| {
                    let person = self.person_by_id(c.person_id)?;
                    Some(ConstraintRecord {
                        user: person.name.clone(),
                        date: c.date,
                        slot: c.slot,
                    })
                })
                .collect(),
            schedule: self.wire_schedule(),
            holidays: self.holidays.iter().copied().collect(),
        }
    }

    /// The schedule map in wire form, keys and values as the store stores them.
    pub fn wire_schedule(&self) -> BTreeMap<String, String> {
        self.schedule
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_wire(&self.people)))
            .collect()
    }
}
