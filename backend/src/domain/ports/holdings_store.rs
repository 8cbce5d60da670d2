//! Driven port for per-user holdings.
//!
//! Snapshots are returned in ascending id order. Deletion is keyed by id
//! alone and silently ignores ids that do not exist.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Holding, HoldingId, NewHolding, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by holdings store adapters.
    pub enum HoldingsStoreError {
        /// The store could not be reached.
        Connection { message: String } => "holdings store connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } => "holdings store query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HoldingsStore: Send + Sync {
    /// Record a validated holding for `owner`.
    async fn add(&self, owner: &Username, holding: &NewHolding) -> Result<(), HoldingsStoreError>;

    /// Every holding owned by `owner`, oldest first.
    async fn list(&self, owner: &Username) -> Result<Vec<Holding>, HoldingsStoreError>;

    /// Remove the holding with `id` if it exists.
    async fn delete(&self, id: HoldingId) -> Result<(), HoldingsStoreError>;
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: i64,
    rows: Vec<Holding>,
}

/// Process-local holdings store for tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryHoldingsStore {
    ledger: Mutex<Ledger>,
}

#[async_trait]
impl HoldingsStore for InMemoryHoldingsStore {
    async fn add(&self, owner: &Username, holding: &NewHolding) -> Result<(), HoldingsStoreError> {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        ledger.next_id += 1;
        let id = HoldingId::new(ledger.next_id);
        ledger.rows.push(Holding::from_parts(
            id,
            owner.clone(),
            holding.asset_name().to_owned(),
            holding.asset_class(),
            holding.value(),
            Utc::now().naive_utc(),
        ));
        Ok(())
    }

    async fn list(&self, owner: &Username) -> Result<Vec<Holding>, HoldingsStoreError> {
        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(ledger
            .rows
            .iter()
            .filter(|holding| holding.owner() == owner)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: HoldingId) -> Result<(), HoldingsStoreError> {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        ledger.rows.retain(|holding| holding.id() != id);
        Ok(())
    }
}
