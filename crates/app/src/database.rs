//! Database connection management

use std::{future::Future, time::Duration};

use sqlx::{
    PgPool,
    migrate::{MigrateError, Migrator},
    postgres::PgPoolOptions,
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Statement deadline used when none is configured.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure of a single store statement.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("statement exceeded its deadline")]
    Timeout,

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

/// Connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    /// `PostgreSQL` connection string.
    pub url: String,

    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// Deadline applied to every statement.
    pub query_timeout: Duration,
}

impl DatabaseOptions {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

/// Connection pool plus the per-statement deadline.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    query_timeout: Duration,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Connect to `PostgreSQL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    #[instrument(name = "db.connect", skip(options), fields(max_connections = options.max_connections))]
    pub async fn connect(options: &DatabaseOptions) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.query_timeout)
            .connect(&options.url)
            .await?;

        debug!("connected to database");

        Ok(Self::new(pool, options.query_timeout))
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    #[must_use]
    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when a migration fails to apply.
    #[instrument(name = "db.migrate", skip(self), err)]
    pub async fn run_migrations(&self) -> Result<(), MigrateError> {
        MIGRATOR.run(&self.pool).await
    }

    /// Run a statement under the configured deadline. On expiry the statement
    /// future is dropped, which cancels it.
    pub(crate) async fn timed<T, F>(&self, statement: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, statement).await {
            Ok(result) => result.map_err(StoreError::Sql),
            Err(_elapsed) => {
                warn!(timeout_ms = self.query_timeout.as_millis(), "statement timed out");

                Err(StoreError::Timeout)
            }
        }
    }
}
