mod test_utils;

use std::collections::BTreeMap;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rotaplan_core::models::requests::MutationResponse;
use rotaplan_core::models::{ConstraintRecord, Slot, StateSnapshot};
use serde_json::json;

use test_utils::{server_over_memory, snapshot_with_users};

fn date(s: &str) -> chrono::NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn add_user_updates_session_and_store() {
    let (server, store) = server_over_memory(StateSnapshot::default());

    let response = server
        .post("/api/users")
        .json(&json!({"name": "Alice", "limit": 4}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: MutationResponse = response.json();
    assert!(body.synced);
    assert!(body.message.is_none());

    let state: StateSnapshot = server.get("/api/state").await.json();
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].name, "Alice");
    assert_eq!(state.users[0].limit, 4);

    let stored = store.contents().await;
    assert_eq!(stored.users, state.users);
}

#[tokio::test]
async fn add_user_rejects_blank_name() {
    let (server, store) = server_over_memory(StateSnapshot::default());

    let response = server
        .post("/api/users")
        .json(&json!({"name": "   ", "limit": 4}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Nothing reached the store
    assert!(store.contents().await.users.is_empty());
}

#[tokio::test]
async fn add_user_rejects_zero_limit() {
    let (server, _store) = server_over_memory(StateSnapshot::default());

    let response = server
        .post("/api/users")
        .json(&json!({"name": "Alice", "limit": 0}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_user_rejects_duplicate_name() {
    let (server, store) = server_over_memory(snapshot_with_users(&[("Alice", 4)]));

    let response = server
        .post("/api/users")
        .json(&json!({"name": "Alice", "limit": 2}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let stored = store.contents().await;
    assert_eq!(stored.users.len(), 1);
    assert_eq!(stored.users[0].limit, 4);
}

#[tokio::test]
async fn edit_user_renames_across_constraints_and_schedule() {
    let snapshot = StateSnapshot {
        users: snapshot_with_users(&[("Alice", 4)]).users,
        constraints: vec![ConstraintRecord {
            user: "Alice".to_string(),
            date: date("2024-01-03"),
            slot: Slot::Am,
        }],
        schedule: BTreeMap::from([("2024-01-03_PM".to_string(), "Alice".to_string())]),
        holidays: vec![],
    };
    let (server, store) = server_over_memory(snapshot);

    let response = server
        .put("/api/users/Alice")
        .json(&json!({"new_name": "Alicia", "new_limit": 2}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let state: StateSnapshot = server.get("/api/state").await.json();
    assert_eq!(state.users[0].name, "Alicia");
    assert_eq!(state.users[0].limit, 2);
    assert_eq!(state.constraints[0].user, "Alicia");
    assert_eq!(state.schedule["2024-01-03_PM"], "Alicia");

    let stored = store.contents().await;
    assert_eq!(stored, state);
}

#[tokio::test]
async fn edit_unknown_user_is_a_no_op() {
    let (server, store) = server_over_memory(snapshot_with_users(&[("Alice", 4)]));

    let response = server
        .put("/api/users/Bob")
        .json(&json!({"new_name": "Robert", "new_limit": 3}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: MutationResponse = response.json();
    assert!(body.synced);

    let stored = store.contents().await;
    assert_eq!(stored.users.len(), 1);
    assert_eq!(stored.users[0].name, "Alice");
}

#[tokio::test]
async fn edit_user_rejects_rename_onto_existing_name() {
    let (server, _store) = server_over_memory(snapshot_with_users(&[("Alice", 4), ("Bob", 4)]));

    let response = server
        .put("/api/users/Bob")
        .json(&json!({"new_name": "Alice", "new_limit": 4}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_user_cascades_constraints_and_keeps_schedule_history() {
    let snapshot = StateSnapshot {
        users: snapshot_with_users(&[("Alice", 4), ("Bob", 4)]).users,
        constraints: vec![ConstraintRecord {
            user: "Alice".to_string(),
            date: date("2024-01-03"),
            slot: Slot::Am,
        }],
        schedule: BTreeMap::from([("2024-01-03_PM".to_string(), "Alice".to_string())]),
        holidays: vec![],
    };
    let (server, store) = server_over_memory(snapshot);

    let response = server.delete("/api/users/Alice").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let state: StateSnapshot = server.get("/api/state").await.json();
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].name, "Bob");
    assert!(state.constraints.is_empty());
    // Past assignments keep showing the departed name
    assert_eq!(state.schedule["2024-01-03_PM"], "Alice");

    let stored = store.contents().await;
    assert_eq!(stored.users.len(), 1);
    assert!(stored.constraints.is_empty());
    assert_eq!(stored.schedule["2024-01-03_PM"], "Alice");
}
