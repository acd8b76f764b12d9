pub mod constraints;
pub mod holidays;
pub mod people;
pub mod schedule;

use eyre::Result;
use sqlx::{Pool, Postgres, Transaction};

/// Advisory lock key shared by every writer of the rota tables.
const ROTA_WRITE_LOCK: i64 = 0x726f_7461;

/// Opens a transaction holding the rota write lock.
///
/// Writers from different clients are serialized store-side; a writer that
/// cannot take the lock within 10 seconds fails the whole write.
pub(crate) async fn write_lock(pool: &Pool<Postgres>) -> Result<Transaction<'static, Postgres>> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET LOCAL lock_timeout = '10s'")
        .execute(&mut *tx)
        .await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(ROTA_WRITE_LOCK)
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
