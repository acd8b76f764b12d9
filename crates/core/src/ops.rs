//! Session operations.
//!
//! Every operation takes the explicit [`RosterState`] session object, applies
//! the change locally, and returns the [`ChangeSet`] of store mutations to
//! replay remotely. The caller owns the second phase: local apply always
//! happens, remote apply is best-effort, and a remote failure leaves the
//! session ahead of the store until the next reload.
//!
//! Error taxonomy follows the spec of the source system: bad input is a
//! `Validation` error, a duplicate name is a `Conflict`, and removing
//! something that is not there is a silent no-op with an empty change-set.

use chrono::NaiveDate;

use crate::engine::{generate, GenerationSummary, GeneratorConfig};
use crate::errors::{RotaError, RotaResult};
use crate::models::{Assignment, Person, Slot, SlotKey, StoreMutation};
use crate::state::{Constraint, RosterState};

/// The ordered store mutations one operation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    mutations: Vec<StoreMutation>,
}

impl ChangeSet {
    pub fn none() -> Self {
        Self::default()
    }

    fn of(mutations: Vec<StoreMutation>) -> Self {
        Self { mutations }
    }

    pub fn mutations(&self) -> &[StoreMutation] {
        &self.mutations
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }
}

fn validate_name(name: &str) -> RotaResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RotaError::Validation("Name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

fn validate_limit(limit: u32) -> RotaResult<u32> {
    if limit == 0 {
        return Err(RotaError::Validation(
            "Duty limit must be at least 1".to_string(),
        ));
    }
    Ok(limit)
}

/// Adds a person to the roster.
pub fn add_person(state: &mut RosterState, name: &str, limit: u32) -> RotaResult<ChangeSet> {
    let name = validate_name(name)?;
    let limit = validate_limit(limit)?;

    if state.person_by_name(&name).is_some() {
        return Err(RotaError::Conflict(format!(
            "A person named '{name}' already exists"
        )));
    }

    state.people.push(Person::new(name.clone(), limit));
    Ok(ChangeSet::of(vec![StoreMutation::AddUser { name, limit }]))
}

/// Renames a person and/or changes their duty limit.
///
/// Constraints and schedule entries reference the person's id, so a rename
/// touches nothing but the roster record; duty counts computed before and
/// after the rename agree under the new name. Editing an unknown person is a
/// silent no-op.
pub fn edit_person(
    state: &mut RosterState,
    old_name: &str,
    new_name: &str,
    new_limit: u32,
) -> RotaResult<ChangeSet> {
    let new_name = validate_name(new_name)?;
    let new_limit = validate_limit(new_limit)?;

    let Some(index) = state.people.iter().position(|p| p.name == old_name) else {
        return Ok(ChangeSet::none());
    };

    if new_name != old_name && state.person_by_name(&new_name).is_some() {
        return Err(RotaError::Conflict(format!(
            "A person named '{new_name}' already exists"
        )));
    }

    let person = &mut state.people[index];
    person.name = new_name.clone();
    person.limit = new_limit;

    Ok(ChangeSet::of(vec![StoreMutation::EditUser {
        old_name: old_name.to_string(),
        new_name,
        new_limit,
    }]))
}

/// Removes a person from the roster.
///
/// Their constraints are cascaded away. Schedule entries are not cleared:
/// they are rewritten to carry the departed person's name verbatim, which is
/// what readers and the store see from then on. Deleting an unknown person is
/// a silent no-op.
pub fn delete_person(state: &mut RosterState, name: &str) -> RotaResult<ChangeSet> {
    let Some(person) = state.person_by_name(name) else {
        return Ok(ChangeSet::none());
    };
    let id = person.id;
    let stale_name = person.name.clone();

    state.people.retain(|p| p.id != id);
    state.constraints.retain(|c| c.person_id != id);
    for value in state.schedule.values_mut() {
        if value.assigned_id() == Some(id) {
            *value = Assignment::Stale(stale_name.clone());
        }
    }

    Ok(ChangeSet::of(vec![StoreMutation::DeleteUser {
        name: stale_name,
    }]))
}

/// Marks a person unavailable for one date+slot.
///
/// Duplicates are allowed and harmless; the availability filter treats any
/// number of matching constraints the same.
pub fn add_constraint(
    state: &mut RosterState,
    user: &str,
    date: NaiveDate,
    slot: Slot,
) -> RotaResult<ChangeSet> {
    let Some(person) = state.person_by_name(user) else {
        return Err(RotaError::Validation(format!(
            "Unknown person '{user}' on constraint"
        )));
    };

    state.constraints.push(Constraint {
        person_id: person.id,
        date,
        slot,
    });

    Ok(ChangeSet::of(vec![StoreMutation::AddConstraint {
        user: user.to_string(),
        date,
        slot,
    }]))
}

/// Removes at most one constraint matching user+date+slot exactly.
///
/// With duplicates present, one call removes one instance. No match is a
/// silent no-op, and then nothing is sent to the store either.
pub fn remove_constraint(
    state: &mut RosterState,
    user: &str,
    date: NaiveDate,
    slot: Slot,
) -> RotaResult<ChangeSet> {
    let Some(person) = state.person_by_name(user) else {
        return Ok(ChangeSet::none());
    };
    let id = person.id;

    let position = state
        .constraints
        .iter()
        .position(|c| c.person_id == id && c.date == date && c.slot == slot);

    match position {
        Some(index) => {
            state.constraints.remove(index);
            Ok(ChangeSet::of(vec![StoreMutation::RemoveConstraint {
                user: user.to_string(),
                date,
                slot,
            }]))
        }
        None => Ok(ChangeSet::none()),
    }
}

/// Marks a date as a holiday: no duty occurs on it regardless of weekday.
///
/// Any existing schedule entries for that date are cleared, and when that
/// happens the full schedule is queued for persistence alongside the holiday
/// itself. Re-marking an existing holiday is a silent no-op.
pub fn add_holiday(state: &mut RosterState, date: NaiveDate) -> RotaResult<ChangeSet> {
    if !state.holidays.insert(date) {
        return Ok(ChangeSet::none());
    }

    let mut cleared = false;
    for slot in Slot::ALL {
        cleared |= state.schedule.remove(&SlotKey::new(date, slot)).is_some();
    }

    let mut mutations = vec![StoreMutation::AddHoliday { date }];
    if cleared {
        mutations.push(StoreMutation::SaveSchedule {
            schedule: state.wire_schedule(),
        });
    }
    Ok(ChangeSet::of(mutations))
}

/// Unmarks a holiday. Absent date is a silent no-op.
pub fn remove_holiday(state: &mut RosterState, date: NaiveDate) -> RotaResult<ChangeSet> {
    if !state.holidays.remove(&date) {
        return Ok(ChangeSet::none());
    }
    Ok(ChangeSet::of(vec![StoreMutation::RemoveHoliday { date }]))
}

/// Regenerates the target month and queues the full schedule for persistence.
pub fn generate_schedule(
    state: &mut RosterState,
    year: i32,
    month: u32,
    config: &GeneratorConfig,
) -> RotaResult<(GenerationSummary, ChangeSet)> {
    if !(1..=12).contains(&month) {
        return Err(RotaError::Validation(format!(
            "Invalid month {month}: expected 1..=12"
        )));
    }

    let summary = generate::generate_month(state, year, month, config);
    let changes = ChangeSet::of(vec![StoreMutation::SaveSchedule {
        schedule: state.wire_schedule(),
    }]);
    Ok((summary, changes))
}
