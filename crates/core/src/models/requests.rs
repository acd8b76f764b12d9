//! Request and response bodies of the HTTP surface.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::GenerationSummary;
use crate::models::Slot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddUserRequest {
    pub name: String,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditUserRequest {
    pub new_name: String,
    pub new_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintRequest {
    pub user: String,
    pub date: NaiveDate,
    pub slot: Slot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub year: i32,
    pub month: u32,
}

/// Outcome of an optimistic mutation.
///
/// `synced: false` means the change was applied to the session but could not
/// be persisted; the session is then ahead of the store until a reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub synced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn new(synced: bool) -> Self {
        let message = (!synced).then(|| {
            "Changes applied locally but not persisted; reload state to reconcile".to_string()
        });
        Self { synced, message }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub summary: GenerationSummary,
    pub synced: bool,
    pub schedule: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountsResponse {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    pub counts: BTreeMap<String, u32>,
}
