//! Backend entry-point: loads configuration, applies migrations, and starts
//! the HTTP server.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use pointmate_backend::inbound::http::health::HealthState;
use pointmate_backend::outbound::persistence::{run_migrations, DbPool, PoolConfig};
use pointmate_backend::server::{create_server, AppSettings, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings
        .bind_addr()
        .parse()
        .map_err(std::io::Error::other)?;
    let upload_dir = settings.upload_dir();
    std::fs::create_dir_all(&upload_dir)?;

    let mut config = ServerConfig::new(bind_addr, upload_dir);
    match settings.database_url.as_deref() {
        Some(database_url) => {
            run_migrations(database_url).map_err(std::io::Error::other)?;
            let pool = DbPool::new(PoolConfig::new(database_url.to_owned()))
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => {
            warn!("POINTMATE_DATABASE_URL not set, using the in-memory store");
        }
    }

    info!(addr = %config.bind_addr(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
