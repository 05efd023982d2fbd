//! CLI command implementations.

pub mod ingredients;
pub mod migrate;
pub mod shopping_list;

use foodgram_api::{config, db};
use sqlx::PgPool;

/// Connect to the database named by `FOODGRAM_DATABASE_URL` (or `DATABASE_URL`).
///
/// # Errors
///
/// Returns an error if the variable is missing or the connection fails.
pub async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = config::database_url_from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;
    Ok(pool)
}
