//! Backend entry-point: loads settings, prepares the SQLite store, and serves
//! the REST API.

mod server;

use std::time::Duration;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use finsight::inbound::http::health::HealthState;
use finsight::inbound::http::session_config::{BuildMode, session_settings_from_env};
use finsight::outbound::persistence::{DbPool, PoolConfig, ensure_schema};
use finsight::settings::AppSettings;
use server::{ServerConfig, create_server};

const POOL_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

async fn open_store(settings: &AppSettings) -> std::io::Result<DbPool> {
    let mut pool_config = PoolConfig::new(settings.database_path())
        .with_connection_timeout(POOL_CHECKOUT_TIMEOUT);
    if let Some(size) = settings.pool_size().map_err(std::io::Error::other)? {
        pool_config = pool_config.with_max_size(size);
    }
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(format!("failed to open database: {err}")))?;
    ensure_schema(&pool)
        .await
        .map_err(|err| std::io::Error::other(format!("failed to prepare schema: {err}")))?;
    Ok(pool)
}

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
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let pool = open_store(&settings).await?;
    info!(
        database_path = settings.database_path(),
        %bind_addr,
        "schema ready; starting server"
    );

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(session, bind_addr).with_db_pool(pool);
    create_server(health_state, config)?.await
}
