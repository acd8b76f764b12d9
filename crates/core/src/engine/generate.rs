//! The month generator: the orchestrator that regenerates every duty
//! assignment for one target month.
//!
//! Generation is a pure in-memory computation over the session state and
//! cannot fail; only the subsequent store write can. Every duty-weekday slot
//! of the target month is overwritten, so a prior run's picks within that
//! month carry no weight beyond what the fairness seed admits.

use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{calendar, counters, eligibility, fairness, FairnessPolicy};
use crate::models::{Assignment, Slot, SlotKey};
use crate::state::RosterState;

/// Knobs of the generator: which weekday carries duty, and how fairness is
/// seeded across runs.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub weekday: Weekday,
    pub fairness: FairnessPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            weekday: Weekday::Wed,
            fairness: FairnessPolicy::default(),
        }
    }
}

/// What a generation run did, for the response and the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub assigned: u32,
    pub unassigned: u32,
    pub holidays_skipped: u32,
}

/// Regenerates all duty assignments for one target month.
///
/// Per duty date, ascending: a holiday drops both of its entries and is
/// skipped; otherwise AM then PM each get the least-loaded eligible person,
/// or the unassigned sentinel when nobody qualifies. Eligibility is the
/// availability filter narrowed by the per-run duty cap; ranking ties break
/// by the yearly seed (when the policy asks for it) and finally by name.
pub fn generate_month(
    state: &mut RosterState,
    year: i32,
    month: u32,
    config: &GeneratorConfig,
) -> GenerationSummary {
    let mut run_tally: HashMap<Uuid, u32> =
        state.people.iter().map(|p| (p.id, 0)).collect();

    let seed_tally = match config.fairness {
        FairnessPolicy::PerRun => HashMap::new(),
        FairnessPolicy::YearlySeeded => counters::yearly_seed(state, year, month),
    };

    let mut summary = GenerationSummary::default();

    for date in calendar::duty_dates(year, month, config.weekday) {
        if state.holidays.contains(&date) {
            for slot in Slot::ALL {
                state.schedule.remove(&SlotKey::new(date, slot));
            }
            summary.holidays_skipped += 1;
            continue;
        }

        for slot in Slot::ALL {
            let candidates = eligibility::available(&state.people, &state.constraints, date, slot);
            let eligible = eligibility::under_cap(candidates, &run_tally);
            let ranked = fairness::rank(eligible, &run_tally, &seed_tally);

            let key = SlotKey::new(date, slot);
            match ranked.first() {
                Some(person) => {
                    state.schedule.insert(key, Assignment::Assigned(person.id));
                    *run_tally.entry(person.id).or_insert(0) += 1;
                    summary.assigned += 1;
                }
                None => {
                    state.schedule.insert(key, Assignment::Unassigned);
                    summary.unassigned += 1;
                }
            }
        }
    }

    summary
}
