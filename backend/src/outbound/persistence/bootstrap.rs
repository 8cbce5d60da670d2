//! Idempotent schema creation run at startup.
//!
//! There is no migration history: both tables are created with
//! `CREATE TABLE IF NOT EXISTS`, so existing files are left untouched.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_PORTFOLIO: &str = "\
CREATE TABLE IF NOT EXISTS portfolio (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    asset_name TEXT NOT NULL,
    asset_type TEXT NOT NULL,
    current_value REAL NOT NULL,
    added_date TEXT DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (username) REFERENCES users(username)
)";

/// Failures while preparing the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaBootstrapError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("failed to create table `{table}`: {source}")]
    Statement {
        table: &'static str,
        #[source]
        source: diesel::result::Error,
    },
}

/// Create the `users` and `portfolio` tables when missing.
///
/// # Errors
///
/// Returns [`SchemaBootstrapError`] when no connection is available or a
/// statement fails.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaBootstrapError> {
    let mut conn = pool.get().await?;
    for (table, statement) in [("users", CREATE_USERS), ("portfolio", CREATE_PORTFOLIO)] {
        diesel::sql_query(statement)
            .execute(&mut conn)
            .await
            .map_err(|source| SchemaBootstrapError::Statement { table, source })?;
    }
    info!(database = "sqlite", "schema ready");
    Ok(())
}
