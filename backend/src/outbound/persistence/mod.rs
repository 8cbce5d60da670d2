//! SQLite persistence adapters using Diesel.
//!
//! Adapters only translate between row structs and domain types. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module.
//!
//! # Example
//!
//! ```no_run
//! use finsight::outbound::persistence::{
//!     DbPool, DieselCredentialStore, DieselHoldingsStore, PoolConfig, ensure_schema,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("finsight.db")).await?;
//! ensure_schema(&pool).await?;
//! let credentials = DieselCredentialStore::new(pool.clone());
//! let holdings = DieselHoldingsStore::new(pool);
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod diesel_basic_error_mapping;
mod diesel_credential_store;
mod diesel_holdings_store;
mod models;
mod pool;
mod schema;

pub use bootstrap::{SchemaBootstrapError, ensure_schema};
pub use diesel_credential_store::DieselCredentialStore;
pub use diesel_holdings_store::DieselHoldingsStore;
pub use pool::{DbPool, PoolConfig, PoolError, SqliteAsyncConnection};
