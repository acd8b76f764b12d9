/// Constraint add/remove handlers
pub mod constraints;
/// Holiday add/remove handlers
pub mod holidays;
/// Roster management handlers
pub mod roster;
/// Schedule generation and reporting handlers
pub mod schedule;
/// Session snapshot and reload handlers
pub mod state;

use rotaplan_core::ops::ChangeSet;
use rotaplan_db::RosterStore;

/// Replays a change-set against the store, best-effort.
///
/// The session has already been mutated when this runs. A failed mutation
/// aborts the replay and returns `false`: the caller reports `synced: false`
/// and the session stays ahead of the store until a reload. Nothing is
/// retried automatically.
pub(crate) async fn sync_changes(store: &dyn RosterStore, changes: &ChangeSet) -> bool {
    for mutation in changes.mutations() {
        if let Err(err) = store.apply(mutation).await {
            tracing::warn!(
                "Store sync failed, session is ahead of the store: {err:#}"
            );
            return false;
        }
    }
    true
}
