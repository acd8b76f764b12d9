use std::collections::BTreeMap;

use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbScheduleEntry;
use crate::repositories::write_lock;

pub async fn get_schedule(pool: &Pool<Postgres>) -> Result<BTreeMap<String, String>> {
    tracing::debug!("Fetching schedule map");

    let entries = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        SELECT slot_key, assigned
        FROM duty_schedule
        ORDER BY slot_key
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(entries
        .into_iter()
        .map(|e| (e.slot_key, e.assigned))
        .collect())
}

/// Full replace of the stored schedule map, in one locked transaction.
///
/// The store holds one global map covering all months; callers always send
/// the whole thing, which is what keeps holiday-cleared keys from lingering.
pub async fn replace_schedule(
    pool: &Pool<Postgres>,
    schedule: &BTreeMap<String, String>,
) -> Result<()> {
    tracing::debug!("Replacing schedule map: {} entries", schedule.len());

    let mut tx = write_lock(pool).await?;

    sqlx::query("DELETE FROM duty_schedule")
        .execute(&mut *tx)
        .await?;

    for (slot_key, assigned) in schedule {
        sqlx::query(
            r#"
            INSERT INTO duty_schedule (slot_key, assigned)
            VALUES ($1, $2)
            "#,
        )
        .bind(slot_key)
        .bind(assigned)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
