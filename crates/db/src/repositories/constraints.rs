use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbConstraint;
use crate::repositories::write_lock;

pub async fn get_constraints(pool: &Pool<Postgres>) -> Result<Vec<DbConstraint>> {
    tracing::debug!("Fetching constraints");

    let constraints = sqlx::query_as::<_, DbConstraint>(
        r#"
        SELECT person_name, duty_date, slot
        FROM duty_constraints
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(constraints)
}

pub async fn add_constraint(
    pool: &Pool<Postgres>,
    person_name: &str,
    date: NaiveDate,
    slot: &str,
) -> Result<()> {
    tracing::debug!(
        "Adding constraint: person={}, date={}, slot={}",
        person_name,
        date,
        slot
    );

    let mut tx = write_lock(pool).await?;
    sqlx::query(
        r#"
        INSERT INTO duty_constraints (person_name, duty_date, slot)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(person_name)
    .bind(date)
    .bind(slot)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(())
}

/// Deletes at most one row matching person+date+slot exactly.
///
/// Duplicate constraints accumulate row by row, so removal peels them off
/// one at a time. No matching row is not an error.
pub async fn remove_constraint(
    pool: &Pool<Postgres>,
    person_name: &str,
    date: NaiveDate,
    slot: &str,
) -> Result<()> {
    tracing::debug!(
        "Removing constraint: person={}, date={}, slot={}",
        person_name,
        date,
        slot
    );

    let mut tx = write_lock(pool).await?;
    sqlx::query(
        r#"
        DELETE FROM duty_constraints
        WHERE id IN (
            SELECT id FROM duty_constraints
            WHERE person_name = $1 AND duty_date = $2 AND slot = $3
            ORDER BY created_at
            LIMIT 1
        )
        "#,
    )
    .bind(person_name)
    .bind(date)
    .bind(slot)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(())
}
