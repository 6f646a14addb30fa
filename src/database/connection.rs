use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    config::DatabaseConfig,
    error::{AppError, Result},
};

/// Connects and brings the schema up to date. The pool is only handed out
/// once every pending migration has applied.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| AppError::InternalError(format!("Migrations failed: {}", e)))?;

    tracing::info!("Database ready ({} max connections)", config.max_connections);

    Ok(pool)
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;

    Ok(())
}
