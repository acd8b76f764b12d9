use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the duty roster.
///
/// The `id` is the stable identity: constraints and schedule entries refer to
/// it, so renaming a person never rewrites those collections. The `name` is
/// what the store and the HTTP surface exchange, and must stay unique within
/// the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    /// Maximum duties this person may take within one generation run.
    pub limit: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, limit: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            limit,
        }
    }
}
