use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

/// Initialize the database connection pool from environment variables.
/// Runs sqlx migrations when MIGRATIONS_PATH is set.
///
/// # Errors
/// Returns an error if DATABASE_URL is not set, the connection fails,
/// or migrations fail.
pub async fn init_database() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    let pool = create_postgres_pool(&config).await?;

    if let Some(path) = &config.migrations_path {
        run_migrations(&pool, path).await?;
    }

    Ok(pool)
}
