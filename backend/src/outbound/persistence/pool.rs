//! Async connection pool over a single SQLite file.
//!
//! Diesel's synchronous `SqliteConnection` is wrapped in
//! `SyncConnectionWrapper`, which runs each query on a blocking thread, and
//! the wrapped connections are pooled with `bb8`. The default pool holds one
//! connection so writes are serialised.
//!
//! Holdings are not tied to registered users, so every connection switches
//! foreign key enforcement off. Bundled SQLite builds enable it by default,
//! which would reject holdings whose owner has no `users` row.

use std::time::Duration;

use diesel::{ConnectionError, ConnectionResult, SqliteConnection};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, RunQueryDsl};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Async-capable SQLite connection used by every adapter.
pub type SqliteAsyncConnection = SyncConnectionWrapper<SqliteConnection>;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool settings.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use finsight::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("finsight.db").with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_path(), "finsight.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_path: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: one connection, 30 second checkout timeout.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            max_size: 1,
            connection_timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

const DISABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = OFF";

/// Open a connection with foreign key enforcement disabled.
fn establish_connection(database_url: &str) -> BoxFuture<'_, ConnectionResult<SqliteAsyncConnection>> {
    async move {
        let mut conn = SqliteAsyncConnection::establish(database_url).await?;
        diesel::sql_query(DISABLE_FOREIGN_KEYS)
            .execute(&mut conn)
            .await
            .map_err(|err| ConnectionError::BadConnection(err.to_string()))?;
        Ok(conn)
    }
    .boxed()
}

/// Shared handle to the pool; cloning is cheap.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<SqliteAsyncConnection>,
}

impl DbPool {
    /// Build the pool and open the first connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the database file cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(establish_connection);
        let manager = AsyncDieselConnectionManager::<SqliteAsyncConnection>::new_with_config(
            config.database_path,
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check a connection out of the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection frees up within the
    /// configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, SqliteAsyncConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
