//! Driven ports implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_store;
mod holdings_store;

#[cfg(test)]
pub use credential_store::MockCredentialStore;
pub use credential_store::{CredentialStore, CredentialStoreError, InMemoryCredentialStore};
#[cfg(test)]
pub use holdings_store::MockHoldingsStore;
pub use holdings_store::{HoldingsStore, HoldingsStoreError, InMemoryHoldingsStore};
