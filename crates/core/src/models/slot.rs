use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::RotaError;

/// One of the two daily duty periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Slot {
    Am,
    Pm,
}

impl Slot {
    /// Both slots in assignment order: AM is always filled before PM.
    pub const ALL: [Slot; 2] = [Slot::Am, Slot::Pm];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Am => write!(f, "AM"),
            Slot::Pm => write!(f, "PM"),
        }
    }
}

impl FromStr for Slot {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Slot::Am),
            "PM" => Ok(Slot::Pm),
            other => Err(RotaError::Validation(format!(
                "Invalid slot '{other}': expected AM or PM"
            ))),
        }
    }
}

/// Key of one schedule entry: a date plus a slot.
///
/// The wire form is `"YYYY-MM-DD_AM"` / `"YYYY-MM-DD_PM"`, the key format the
/// store persists. Ordering is by date, then AM before PM, so iterating a
/// schedule map walks the month chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub slot: Slot,
}

impl SlotKey {
    pub fn new(date: NaiveDate, slot: Slot) -> Self {
        Self { date, slot }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.date.format("%Y-%m-%d"), self.slot)
    }
}

impl FromStr for SlotKey {
    type Err = RotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date_part, slot_part) = s.rsplit_once('_').ok_or_else(|| {
            RotaError::Validation(format!("Invalid slot key '{s}': missing '_' separator"))
        })?;
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
            RotaError::Validation(format!("Invalid date in slot key '{s}': {e}"))
        })?;
        let slot = slot_part.parse()?;
        Ok(Self { date, slot })
    }
}
