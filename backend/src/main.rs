//! Print broker entry-point: loads settings, prepares storage and serves the
//! REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use print_broker::inbound::http::health::HealthState;
use print_broker::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server, drain_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| io::Error::other(format!("failed to load configuration: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("invalid bind address: {e}"))
    })?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool_config) = settings.pool_config() {
        if settings.run_migrations() {
            run_pending_migrations(pool_config.database_url())
                .await
                .map_err(io::Error::other)?;
        }
        let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(&health_state, &config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move { drain_on(shutdown_signal(), &health_state, &handle).await });
    info!(%bind_addr, "print broker listening");
    server.await
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(error) => warn!(%error, "SIGTERM handler unavailable"),
        }
    }

    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "shutdown signal handler unavailable");
        std::future::pending::<()>().await;
    }
}
