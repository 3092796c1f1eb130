use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.configuration_error")]
    ConfigurationError,
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// When set, migrations from this directory run at startup.
    pub migrations_path: Option<String>,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            migrations_path: None,
        }
    }

    /// Loads database configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - MIGRATIONS_PATH: Directory of sqlx migrations to run (optional)
    pub fn from_env() -> Result<Self, DatabaseError> {
        let connection_string =
            env::var("DATABASE_URL").map_err(|_| DatabaseError::ConfigurationError)?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5);
        let migrations_path = env::var("MIGRATIONS_PATH").ok();

        Ok(Self {
            connection_string,
            max_connections,
            acquire_timeout: Duration::from_secs(30),
            migrations_path,
        })
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationError)
}
