use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use rotaplan_api::config::ApiConfig;
use rotaplan_db::{create_pool, schema::initialize_database, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Start API server over the Postgres-backed store
    let store = Arc::new(PgStore::new(db_pool));
    rotaplan_api::start_server(config, store).await?;

    Ok(())
}
