//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI arguments, `PRINT_BROKER_*` environment variables and
//! the defaults below, in that order of precedence.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use print_broker::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRINT_BROKER")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. In-memory storage is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
    /// Idle connections the pool keeps open.
    #[ortho_config(default = 2)]
    pub db_min_idle: u32,
    /// Seconds to wait for a pooled connection.
    #[ortho_config(default = 30)]
    pub db_connection_timeout_secs: u64,
    /// Leave the schema untouched at startup instead of applying the embedded
    /// migrations.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Pool configuration for the configured database, if any.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_deref().map(|url| {
            PoolConfig::new(url)
                .with_max_size(self.db_max_connections)
                .with_min_idle(Some(self.db_min_idle))
                .with_connection_timeout(Duration::from_secs(self.db_connection_timeout_secs))
        })
    }

    /// Whether embedded migrations run before the server binds.
    #[must_use]
    pub const fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }
}
