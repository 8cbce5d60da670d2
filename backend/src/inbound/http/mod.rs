//! HTTP inbound adapter exposing REST endpoints.

pub mod about;
pub mod accounts;
pub mod error;
pub mod health;
pub mod holdings;
pub mod insights;
mod port_errors;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
mod validation;

pub use error::ApiResult;
