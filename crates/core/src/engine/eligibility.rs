use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Person, Slot};
use crate::state::Constraint;

/// Roster members with no unavailability constraint for this date+slot.
///
/// Preserves roster order; duplicate constraints filter identically to a
/// single one.
pub fn available<'a>(
    people: &'a [Person],
    constraints: &[Constraint],
    date: NaiveDate,
    slot: Slot,
) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| {
            !constraints
                .iter()
                .any(|c| c.person_id == person.id && c.date == date && c.slot == slot)
        })
        .collect()
}

/// Drops candidates who already reached their duty limit in this run.
///
/// Applied strictly after availability filtering.
pub fn under_cap<'a>(
    candidates: Vec<&'a Person>,
    run_tally: &HashMap<Uuid, u32>,
) -> Vec<&'a Person> {
    candidates
        .into_iter()
        .filter(|person| run_tally.get(&person.id).copied().unwrap_or(0) < person.limit)
        .collect()
}
