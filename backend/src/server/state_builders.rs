//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use finsight::domain::ports::{
    CredentialStore, HoldingsStore, InMemoryCredentialStore, InMemoryHoldingsStore,
};
use finsight::inbound::http::state::HttpState;
use finsight::outbound::persistence::{DieselCredentialStore, DieselHoldingsStore};

use super::ServerConfig;

/// Wire SQLite-backed stores when a pool is configured, in-memory ones
/// otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (credentials, holdings): (Arc<dyn CredentialStore>, Arc<dyn HoldingsStore>) =
        match &config.db_pool {
            Some(pool) => (
                Arc::new(DieselCredentialStore::new(pool.clone())),
                Arc::new(DieselHoldingsStore::new(pool.clone())),
            ),
            None => {
                warn!("no database pool configured; accounts and holdings are kept in memory");
                (
                    Arc::new(InMemoryCredentialStore::default()),
                    Arc::new(InMemoryHoldingsStore::default()),
                )
            }
        };
    web::Data::new(HttpState::new(credentials, holdings, Arc::new(DefaultClock)))
}
