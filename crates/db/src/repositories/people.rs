use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbPerson;
use crate::repositories::write_lock;

pub async fn get_people(pool: &Pool<Postgres>) -> Result<Vec<DbPerson>> {
    tracing::debug!("Fetching roster");

    let people = sqlx::query_as::<_, DbPerson>(
        r#"
        SELECT id, name, duty_limit
        FROM people
        ORDER BY created_at, name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(people)
}

pub async fn add_person(pool: &Pool<Postgres>, name: &str, limit: i32) -> Result<()> {
    tracing::debug!("Adding person: name={}, limit={}", name, limit);

    let mut tx = write_lock(pool).await?;
    sqlx::query(
        r#"
        INSERT INTO people (name, duty_limit)
        VALUES ($1, $2)
        "#,
    )
    .bind(name)
    .bind(limit)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(())
}

/// Renames a person and/or updates their duty limit.
///
/// The rename cascades to constraint rows and schedule values in the same
/// locked transaction, so the store never exposes a half-renamed state.
pub async fn edit_person(
    pool: &Pool<Postgres>,
    old_name: &str,
    new_name: &str,
    new_limit: i32,
) -> Result<()> {
    tracing::debug!(
        "Editing person: old_name={}, new_name={}, new_limit={}",
        old_name,
        new_name,
        new_limit
    );

    let mut tx = write_lock(pool).await?;

    sqlx::query(
        r#"
        UPDATE people
        SET name = $2, duty_limit = $3
        WHERE name = $1
        "#,
    )
    .bind(old_name)
    .bind(new_name)
    .bind(new_limit)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE duty_constraints
        SET person_name = $2
        WHERE person_name = $1
        "#,
    )
    .bind(old_name)
    .bind(new_name)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE duty_schedule
        SET assigned = $2
        WHERE assigned = $1
        "#,
    )
    .bind(old_name)
    .bind(new_name)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

/// Deletes a person and their constraint rows.
///
/// Schedule values are left alone: the departed name stays readable as a
/// stale entry until the month is regenerated.
pub async fn delete_person(pool: &Pool<Postgres>, name: &str) -> Result<()> {
    tracing::debug!("Deleting person: name={}", name);

    let mut tx = write_lock(pool).await?;

    sqlx::query("DELETE FROM people WHERE name = $1")
        .bind(name)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM duty_constraints WHERE person_name = $1")
        .bind(name)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
