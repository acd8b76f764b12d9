use std::sync::Arc;

use axum_test::TestServer;
use rotaplan_api::{build_router, ApiState};
use rotaplan_core::engine::GeneratorConfig;
use rotaplan_core::models::{StateSnapshot, UserRecord};
use rotaplan_core::state::RosterState;
use rotaplan_db::mock::MemoryStore;
use rotaplan_db::RosterStore;
use tokio::sync::RwLock;

/// A snapshot holding just the given roster.
pub fn snapshot_with_users(users: &[(&str, u32)]) -> StateSnapshot {
    StateSnapshot {
        users: users
            .iter()
            .map(|&(name, limit)| UserRecord {
                name: name.to_string(),
                limit,
            })
            .collect(),
        ..StateSnapshot::default()
    }
}

/// Spins up a test server over a memory store seeded with `snapshot`.
///
/// The store handle is returned alongside the server so tests can assert on
/// what actually got persisted.
pub fn server_over_memory(snapshot: StateSnapshot) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(snapshot.clone()));
    let server = server_over_store(store.clone(), &snapshot);
    (server, store)
}

/// Spins up a test server over any store, with the session loaded from
/// `snapshot`.
pub fn server_over_store(store: Arc<dyn RosterStore>, snapshot: &StateSnapshot) -> TestServer {
    let state = Arc::new(ApiState {
        store,
        session: RwLock::new(RosterState::from_snapshot(snapshot)),
        generator: GeneratorConfig::default(),
    });
    TestServer::new(build_router(state)).unwrap()
}
