//! Application settings loaded via OrthoConfig.
//!
//! Values come from `FINSIGHT_*` environment variables, CLI flags, or a
//! configuration file. Session cookie settings are read separately; see
//! [`crate::inbound::http::session_config`].

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_PATH: &str = "finsight.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("pool size must be at least 1")]
    ZeroPoolSize,
}

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FINSIGHT")]
pub struct AppSettings {
    /// SQLite file holding users and holdings.
    #[ortho_config(default = DEFAULT_DATABASE_PATH.to_owned())]
    pub database_path: String,
    /// Socket address the HTTP server listens on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Maximum pooled SQLite connections.
    pub pool_size: Option<u32>,
}

impl AppSettings {
    /// Configured database path; `finsight.db` in the working directory by
    /// default.
    pub fn database_path(&self) -> &str {
        &self.database_path
    }

    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|source| SettingsError::BindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// Configured pool size, if overridden.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroPoolSize`] for an explicit `0`.
    pub fn pool_size(&self) -> Result<Option<u32>, SettingsError> {
        match self.pool_size {
            Some(0) => Err(SettingsError::ZeroPoolSize),
            other => Ok(other),
        }
    }
}
