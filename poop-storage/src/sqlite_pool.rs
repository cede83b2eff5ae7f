//! SQLite connection pool wrapper for the storage crate.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::{debug, info};

use crate::error::{Result, StorageError};

/// Upper bound for [`SqlitePoolManager::ping`].
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Manages a single SQLite pool; creates DB file if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given database. Accepts a plain file path or a `sqlite:` URL.
    pub async fn new(database_url: &str) -> std::result::Result<Self, sqlx::Error> {
        info!(database_url = %database_url, "Initializing SQLite pool");

        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true)
        } else {
            SqliteConnectOptions::new()
                .create_if_missing(true)
                .filename(database_url)
        };

        let pool = SqlitePool::connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trips a trivial statement; fails when the pool cannot answer within [`HEALTH_CHECK_TIMEOUT`].
    pub async fn ping(&self) -> Result<()> {
        let probe = sqlx::query("SELECT 1").execute(&self.pool);
        within_health_timeout(probe).await?;
        debug!("Database health check passed");
        Ok(())
    }
}

async fn within_health_timeout<F, T>(probe: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, probe).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(StorageError::Database(format!(
            "database health check failed: {}",
            e
        ))),
        Err(_) => Err(StorageError::Database(format!(
            "database health check timed out after {}s",
            HEALTH_CHECK_TIMEOUT.as_secs()
        ))),
    }
}
