use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create people table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL UNIQUE,
            duty_limit INTEGER NOT NULL DEFAULT 4,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_duty_limit CHECK (duty_limit >= 1)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create duty_constraints table. Rows reference people by name, not id:
    // the store contract is name-keyed and duplicate rows are permitted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS duty_constraints (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            person_name VARCHAR(255) NOT NULL,
            duty_date DATE NOT NULL,
            slot VARCHAR(2) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_slot CHECK (slot IN ('AM', 'PM'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create holidays table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            holiday DATE PRIMARY KEY
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create duty_schedule table. The assigned column holds a person's name,
    // the 'Unassigned' sentinel, or the stale name of a deleted person.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS duty_schedule (
            slot_key VARCHAR(13) PRIMARY KEY,
            assigned VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_duty_constraints_person_name ON duty_constraints(person_name)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_duty_constraints_duty_date ON duty_constraints(duty_date)",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
