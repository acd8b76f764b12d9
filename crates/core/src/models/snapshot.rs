use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Slot;

/// One roster row as the store exchanges it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub limit: u32,
}

/// One unavailability row as the store exchanges it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintRecord {
    pub user: String,
    pub date: NaiveDate,
    pub slot: Slot,
}

/// The fetch-all wire shape: everything the store holds, in one payload.
///
/// Dates travel as `YYYY-MM-DD` strings and schedule keys as
/// `"<date>_<AM|PM>"`; the store normalizes any richer representation into
/// this canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub users: Vec<UserRecord>,
    pub constraints: Vec<ConstraintRecord>,
    pub schedule: BTreeMap<String, String>,
    pub holidays: Vec<NaiveDate>,
}

/// A named mutation to replay against the store.
///
/// Variant and field names follow the store's action protocol (`addUser`,
/// `editUser`, ... with camelCase payloads). `SaveSchedule` is a full replace
/// of the stored schedule map; `RemoveConstraint` deletes at most one exact
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreMutation {
    AddUser {
        name: String,
        limit: u32,
    },
    EditUser {
        old_name: String,
        new_name: String,
        new_limit: u32,
    },
    DeleteUser {
        name: String,
    },
    AddConstraint {
        user: String,
        date: NaiveDate,
        slot: Slot,
    },
    RemoveConstraint {
        user: String,
        date: NaiveDate,
        slot: Slot,
    },
    AddHoliday {
        date: NaiveDate,
    },
    RemoveHoliday {
        date: NaiveDate,
    },
    SaveSchedule {
        schedule: BTreeMap<String, String>,
    },
}
