use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPerson {
    pub id: Uuid,
    pub name: String,
    pub duty_limit: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbConstraint {
    pub person_name: String,
    pub duty_date: NaiveDate,
    pub slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleEntry {
    pub slot_key: String,
    pub assigned: String,
}
