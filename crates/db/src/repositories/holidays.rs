use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::repositories::write_lock;

pub async fn get_holidays(pool: &Pool<Postgres>) -> Result<Vec<NaiveDate>> {
    tracing::debug!("Fetching holidays");

    let holidays = sqlx::query_scalar::<_, NaiveDate>(
        r#"
        SELECT holiday FROM holidays ORDER BY holiday
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(holidays)
}

pub async fn add_holiday(pool: &Pool<Postgres>, date: NaiveDate) -> Result<()> {
    tracing::debug!("Adding holiday: date={}", date);

    let mut tx = write_lock(pool).await?;
    sqlx::query(
        r#"
        INSERT INTO holidays (holiday)
        VALUES ($1)
        ON CONFLICT (holiday) DO NOTHING
        "#,
    )
    .bind(date)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(())
}

pub async fn remove_holiday(pool: &Pool<Postgres>, date: NaiveDate) -> Result<()> {
    tracing::debug!("Removing holiday: date={}", date);

    let mut tx = write_lock(pool).await?;
    sqlx::query("DELETE FROM holidays WHERE holiday = $1")
        .bind(date)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(())
}
