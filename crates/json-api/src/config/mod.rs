//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{db::DatabaseConfig, logging::LoggingConfig, listen::ListenConfig};

pub(crate) mod db;
pub(crate) mod listen;
pub(crate) mod logging;

pub(crate) use logging::LogFormat;

/// Roster JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "roster-json", about = "Roster JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Listener address.
    #[command(flatten)]
    pub listen: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Address the listener binds to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        (&self.listen).into()
    }
}
