//! Server configuration: settings loaded via OrthoConfig plus the builder
//! object that wires the server together.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DbPool;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Application settings sourced from environment, CLI, and config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POINTMATE")]
pub struct AppSettings {
    /// Socket address to bind, e.g. `0.0.0.0:3000`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. When absent the server runs on the
    /// in-memory store.
    pub database_url: Option<String>,
    /// Directory that poster uploads are written to and served from.
    pub upload_dir: Option<PathBuf>,
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured upload directory, falling back to the default.
    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) upload_dir: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration for the given bind address and
    /// upload directory.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, upload_dir: PathBuf) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            upload_dir,
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// Without a pool the server falls back to the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
