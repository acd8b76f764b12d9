//! The store boundary.
//!
//! `RosterStore` is the contract the rest of the workspace programs against:
//! one fetch-all read and a set of named, replayable mutations. The Postgres
//! implementation lives here; an in-memory one for tests lives in
//! [`crate::mock`].

use async_trait::async_trait;
use eyre::Result;
use sqlx::{Pool, Postgres};

use rotaplan_core::models::{ConstraintRecord, StateSnapshot, StoreMutation, UserRecord};

use crate::repositories::{constraints, holidays, people, schedule};

/// The persistence collaborator, treated as an opaque remote store.
///
/// All mutations except `AddUser`/`AddConstraint`/`AddHoliday` are safe to
/// retry; those three can create duplicates under at-least-once delivery.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Everything the store holds, in canonical wire form.
    async fn fetch_all(&self) -> Result<StateSnapshot>;

    /// Applies one named mutation. Writers are serialized store-side; a
    /// write that cannot take the lock within its bounded wait fails.
    async fn apply(&self, mutation: &StoreMutation) -> Result<()>;
}

/// Postgres-backed store.
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterStore for PgStore {
    async fn fetch_all(&self) -> Result<StateSnapshot> {
        let users = people::get_people(&self.pool)
            .await?
            .into_iter()
            .map(|p| UserRecord {
                name: p.name,
                limit: p.duty_limit.max(1) as u32,
            })
            .collect();

        // A constraint row with an unparseable slot is skipped rather than
        // failing the whole fetch; the schema check should make this
        // unreachable.
        let constraints = constraints::get_constraints(&self.pool)
            .await?
            .into_iter()
            .filter_map(|c| match c.slot.parse() {
                Ok(slot) => Some(ConstraintRecord {
                    user: c.person_name,
                    date: c.duty_date,
                    slot,
                }),
                Err(_) => {
                    tracing::warn!("Skipping constraint with invalid slot '{}'", c.slot);
                    None
                }
            })
            .collect();

        Ok(StateSnapshot {
            users,
            constraints,
            schedule: schedule::get_schedule(&self.pool).await?,
            holidays: holidays::get_holidays(&self.pool).await?,
        })
    }

    async fn apply(&self, mutation: &StoreMutation) -> Result<()> {
        match mutation {
            StoreMutation::AddUser { name, limit } => {
                people::add_person(&self.pool, name, *limit as i32).await
            }
            StoreMutation::EditUser {
                old_name,
                new_name,
                new_limit,
            } => people::edit_person(&self.pool, old_name, new_name, *new_limit as i32).await,
            StoreMutation::DeleteUser { name } => people::delete_person(&self.pool, name).await,
            StoreMutation::AddConstraint { user, date, slot } => {
                constraints::add_constraint(&self.pool, user, *date, &slot.to_string()).await
            }
            StoreMutation::RemoveConstraint { user, date, slot } => {
                constraints::remove_constraint(&self.pool, user, *date, &slot.to_string()).await
            }
            StoreMutation::AddHoliday { date } => holidays::add_holiday(&self.pool, *date).await,
            StoreMutation::RemoveHoliday { date } => {
                holidays::remove_holiday(&self.pool, *date).await
            }
            StoreMutation::SaveSchedule { schedule: map } => {
                schedule::replace_schedule(&self.pool, map).await
            }
        }
    }
}
