//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{DatabaseOptions, Db},
    domain::{
        roles::{PgRolesService, RolesService},
        tenants::{PgTenantsService, TenantsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    pub tenants: Arc<dyn TenantsService>,
    pub roles: Arc<dyn RolesService>,
}

impl AppContext {
    /// Wires Postgres-backed services over one database handle.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            tenants: Arc::new(PgTenantsService::new(db.clone())),
            roles: Arc::new(PgRolesService::new(db)),
        }
    }

    /// Build application context from database options, optionally applying
    /// pending migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn connect(
        options: &DatabaseOptions,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let db = Db::connect(options)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            db.run_migrations()
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::new(db))
    }
}
