//! Inputs for [`create_server`](super::create_server).

use std::net::SocketAddr;

use finsight::inbound::http::session_config::SessionSettings;
use finsight::outbound::persistence::DbPool;

/// Resolved session settings, listen address, and optional store pool.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            db_pool: None,
        }
    }

    /// Back accounts and holdings with SQLite instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "read by bootstrap tests only")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
