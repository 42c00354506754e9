//! Database Config

use std::time::Duration;

use clap::{ArgAction, Args};
use roster_app::database::DatabaseOptions;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,

    /// Per-statement deadline in milliseconds
    #[arg(long, env = "DATABASE_QUERY_TIMEOUT_MS", default_value_t = 5_000)]
    pub database_query_timeout_ms: u64,

    /// Apply pending migrations at startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = false, action = ArgAction::Set)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Connection options for the app context.
    #[must_use]
    pub fn options(&self) -> DatabaseOptions {
        DatabaseOptions {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            query_timeout: Duration::from_millis(self.database_query_timeout_ms),
        }
    }
}
