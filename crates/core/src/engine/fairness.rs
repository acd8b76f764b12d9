use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RotaError;
use crate::models::Person;

/// How fairness ordering is seeded at the start of a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FairnessPolicy {
    /// Only duties assigned within the current run count.
    #[default]
    PerRun,
    /// Ties on the run tally break toward people with fewer duties elsewhere
    /// in the target year.
    YearlySeeded,
}

impl FromStr for FairnessPolicy {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-run" => Ok(FairnessPolicy::PerRun),
            "yearly-seeded" => Ok(FairnessPolicy::YearlySeeded),
            other => Err(RotaError::Validation(format!(
                "Invalid fairness policy '{other}': expected 'per-run' or 'yearly-seeded'"
            ))),
        }
    }
}

/// Orders eligible people by the fairness key, least loaded first.
///
/// Sort key is `(run tally, seed tally, name)`; the name is the final
/// deterministic tie-break, so identical inputs always pick the same person.
/// The first element of the result is the one to assign.
pub fn rank<'a>(
    mut eligible: Vec<&'a Person>,
    run_tally: &HashMap<Uuid, u32>,
    seed_tally: &HashMap<Uuid, u32>,
) -> Vec<&'a Person> {
    eligible.sort_by(|a, b| {
        let key_a = (
            run_tally.get(&a.id).copied().unwrap_or(0),
            seed_tally.get(&a.id).copied().unwrap_or(0),
        );
        let key_b = (
            run_tally.get(&b.id).copied().unwrap_or(0),
            seed_tally.get(&b.id).copied().unwrap_or(0),
        );
        key_a.cmp(&key_b).then_with(|| a.name.cmp(&b.name))
    });
    eligible
}
