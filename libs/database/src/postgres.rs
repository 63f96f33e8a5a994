//! PostgreSQL connector: configuration, connection with retry, migrations,
//! and health checking.

use core_config::{env_or_default, env_required, ConfigError, FromEnv};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info};

use crate::common::{retry, retry_with_backoff, DatabaseError, RetryConfig};

// Re-export SeaORM types for convenience
pub use sea_orm::DatabaseConnection;

/// PostgreSQL connection pool configuration.
///
/// Construct manually or load from environment variables via [`FromEnv`].
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL (required)
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convert this config into SeaORM ConnectOptions.
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: true,
        }
    }
}

/// Environment variables:
/// - `DATABASE_URL` (required)
/// - `DB_MAX_CONNECTIONS` (optional, default: 20)
/// - `DB_MIN_CONNECTIONS` (optional, default: 2)
/// - `DB_CONNECT_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_SQLX_LOGGING` (optional, default: true)
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("DATABASE_URL")?;

        let parse_u32 = |key: &str, default: &str| -> Result<u32, ConfigError> {
            env_or_default(key, default)
                .parse()
                .map_err(|e| ConfigError::ParseError {
                    key: key.to_string(),
                    details: format!("{}", e),
                })
        };

        let parse_u64 = |key: &str, default: &str| -> Result<u64, ConfigError> {
            env_or_default(key, default)
                .parse()
                .map_err(|e| ConfigError::ParseError {
                    key: key.to_string(),
                    details: format!("{}", e),
                })
        };

        Ok(Self {
            url,
            max_connections: parse_u32("DB_MAX_CONNECTIONS", "20")?,
            min_connections: parse_u32("DB_MIN_CONNECTIONS", "2")?,
            connect_timeout_secs: parse_u64("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: parse_u64("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_or_default("DB_SQLX_LOGGING", "true") == "true",
        })
    }
}

/// Connect using a PostgresConfig.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.into_connect_options()).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect from config with automatic retry on failure.
///
/// Uses exponential backoff to ride out transient network issues during
/// startup (e.g. the database container coming up after the API).
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();

    let attempt = || {
        let opts = options.clone();
        async move {
            let db = Database::connect(opts).await?;
            info!("Successfully connected to PostgreSQL database");
            Ok(db)
        }
    };

    match retry_config {
        Some(config) => retry_with_backoff(attempt, config).await,
        None => retry(attempt).await,
    }
}

/// Run pending migrations for the given migrator.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
) -> Result<(), DatabaseError> {
    info!("Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Database migrations up to date");
    Ok(())
}

/// Check PostgreSQL database health with a `SELECT 1` round trip.
///
/// Used by the readiness probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL health check failed: {}", e))
    })?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/menu")),
                ("DB_MAX_CONNECTIONS", None),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.url, "postgres://localhost/menu");
                assert_eq!(config.max_connections, 20);
                assert_eq!(config.min_connections, 2);
                assert!(config.sqlx_logging);
            },
        );
    }

    #[test]
    fn test_postgres_config_requires_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(PostgresConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_postgres_config_rejects_bad_pool_size() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/menu")),
                ("DB_MAX_CONNECTIONS", Some("lots")),
            ],
            || {
                assert!(PostgresConfig::from_env().is_err());
            },
        );
    }
}
