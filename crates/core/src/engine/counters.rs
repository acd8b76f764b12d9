use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use uuid::Uuid;

use crate::state::RosterState;

/// Duties per current person within one year+month.
///
/// Counts only entries whose value resolves to a current roster member; the
/// unassigned sentinel and stale names of deleted people contribute nothing.
/// Every current person appears in the result, zero included.
pub fn monthly_counts(state: &RosterState, year: i32, month: u32) -> BTreeMap<String, u32> {
    counts_where(state, |y, m| y == year && m == month)
}

/// Duties per current person across a whole year.
pub fn yearly_counts(state: &RosterState, year: i32) -> BTreeMap<String, u32> {
    counts_where(state, |y, _| y == year)
}

/// Id-keyed duty counts over the target year excluding one month.
///
/// This is the fairness seed for a generation run: duties a person already
/// holds elsewhere in the year, with the month being regenerated left out so
/// its previous contents cannot bias its own regeneration.
pub fn yearly_seed(state: &RosterState, year: i32, excluded_month: u32) -> HashMap<Uuid, u32> {
    let mut seed = HashMap::new();
    for (key, value) in &state.schedule {
        if key.date.year() != year || key.date.month() == excluded_month {
            continue;
        }
        if let Some(id) = value.assigned_id() {
            if state.person_by_id(id).is_some() {
                *seed.entry(id).or_insert(0) += 1;
            }
        }
    }
    seed
}

fn counts_where(
    state: &RosterState,
    in_scope: impl Fn(i32, u32) -> bool,
) -> BTreeMap<String, u32> {
    let mut counts: BTreeMap<String, u32> = state
        .people
        .iter()
        .map(|p| (p.name.clone(), 0))
        .collect();

    for (key, value) in &state.schedule {
        if !in_scope(key.date.year(), key.date.month()) {
            continue;
        }
        let Some(id) = value.assigned_id() else {
            continue;
        };
        if let Some(person) = state.person_by_id(id) {
            *counts.entry(person.name.clone()).or_insert(0) += 1;
        }
    }

    counts
}
