/**
 * Server Configuration
 *
 * This module reads the server settings from environment variables, which
 * `main` may first load from a `.env` file.
 *
 * # Variables
 *
 * - `DATABASE_URL` - SQLite URL (default `sqlite://kanban.db?mode=rwc`)
 * - `SERVER_PORT` - listen port (default 5000)
 * - `DB_MAX_CONNECTIONS` - pool size (default 5)
 * - `SEED_DEMO_DATA` - `1` seeds a demo board into an empty database
 *
 * Malformed numbers fail with `ConfigError::InvalidValue` rather than falling
 * back silently.
 */

use std::net::SocketAddr;

use crate::backend::database::{Database, DEFAULT_MAX_CONNECTIONS};
use crate::backend::error::BackendResult;
use crate::shared::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://kanban.db?mode=rwc";
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Settings for one server process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_SERVER_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_demo_data: false,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, treating blank values as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(url) = read("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(port) = read("SERVER_PORT") {
            config.port = parse_value("SERVER_PORT", port)?;
        }
        if let Some(max) = read("DB_MAX_CONNECTIONS") {
            config.max_connections = parse_value("DB_MAX_CONNECTIONS", max)?;
        }
        config.seed_demo_data = read("SEED_DEMO_DATA").is_some_and(|value| value == "1");

        Ok(config)
    }

    /// Address to bind on all interfaces
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

/// Connect to the configured database and apply the schema
pub async fn load_database(config: &ServerConfig) -> BackendResult<Database> {
    tracing::info!("Connecting to database at {}", config.database_url);
    let db = Database::connect(&config.database_url, config.max_connections).await?;
    tracing::info!("Database ready");
    Ok(db)
}
