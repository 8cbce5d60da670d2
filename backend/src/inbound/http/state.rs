//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only depend on ports, so
//! tests can swap in in-memory stores or mocks.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{CredentialStore, HoldingsStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub credentials: Arc<dyn CredentialStore>,
    pub holdings: Arc<dyn HoldingsStore>,
    /// Source of "today" for export filenames.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl HttpState {
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use finsight::domain::ports::{InMemoryCredentialStore, InMemoryHoldingsStore};
    /// use finsight::inbound::http::state::HttpState;
    /// use mockable::DefaultClock;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryCredentialStore::default()),
    ///     Arc::new(InMemoryHoldingsStore::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _holdings = state.holdings.clone();
    /// ```
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        holdings: Arc<dyn HoldingsStore>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            credentials,
            holdings,
            clock,
        }
    }
}
