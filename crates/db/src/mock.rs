//! Test doubles for the store boundary.
//!
//! `MemoryStore` implements the full store contract over an in-memory
//! snapshot and backs the api handler tests. `MockStore` is a mockall mock of
//! [`RosterStore`] for failure injection.

use async_trait::async_trait;
use eyre::Result;
use mockall::mock;
use tokio::sync::Mutex;

use rotaplan_core::models::{ConstraintRecord, StateSnapshot, StoreMutation, UserRecord};

use crate::store::RosterStore;

mock! {
    pub Store {}

    #[async_trait]
    impl RosterStore for Store {
        async fn fetch_all(&self) -> Result<StateSnapshot>;
        async fn apply(&self, mutation: &StoreMutation) -> Result<()>;
    }
}

/// In-memory store with the same observable semantics as the Postgres one.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: Mutex<StateSnapshot>,
}

impl MemoryStore {
    pub fn new(snapshot: StateSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }

    /// A copy of the current contents, for assertions.
    pub async fn contents(&self) -> StateSnapshot {
        self.snapshot.lock().await.clone()
    }
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn fetch_all(&self) -> Result<StateSnapshot> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn apply(&self, mutation: &StoreMutation) -> Result<()> {
        let mut snapshot = self.snapshot.lock().await;
        match mutation {
            StoreMutation::AddUser { name, limit } => {
                snapshot.users.push(UserRecord {
                    name: name.clone(),
                    limit: *limit,
                });
            }
            StoreMutation::EditUser {
                old_name,
                new_name,
                new_limit,
            } => {
                for user in snapshot.users.iter_mut().filter(|u| u.name == *old_name) {
                    user.name = new_name.clone();
                    user.limit = *new_limit;
                }
                for c in snapshot
                    .constraints
                    .iter_mut()
                    .filter(|c| c.user == *old_name)
                {
                    c.user = new_name.clone();
                }
                for value in snapshot.schedule.values_mut() {
                    if value == old_name {
                        *value = new_name.clone();
                    }
                }
            }
            StoreMutation::DeleteUser { name } => {
                snapshot.users.retain(|u| u.name != *name);
                snapshot.constraints.retain(|c| c.user != *name);
                // Schedule values keep the stale name.
            }
            StoreMutation::AddConstraint { user, date, slot } => {
                snapshot.constraints.push(ConstraintRecord {
                    user: user.clone(),
                    date: *date,
                    slot: *slot,
                });
            }
            StoreMutation::RemoveConstraint { user, date, slot } => {
                // At most one exact match is removed.
                if let Some(index) = snapshot
                    .constraints
                    .iter()
                    .position(|c| c.user == *user && c.date == *date && c.slot == *slot)
                {
                    snapshot.constraints.remove(index);
                }
            }
            StoreMutation::AddHoliday { date } => {
                if !snapshot.holidays.contains(date) {
                    snapshot.holidays.push(*date);
                    snapshot.holidays.sort();
                }
            }
            StoreMutation::RemoveHoliday { date } => {
                snapshot.holidays.retain(|d| d != date);
            }
            StoreMutation::SaveSchedule { schedule } => {
                snapshot.schedule = schedule.clone();
            }
        }
        Ok(())
    }
}
