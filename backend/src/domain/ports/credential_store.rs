//! Driven port for account persistence and credential checks.
//!
//! Registration and authentication both compare digests only; plaintext
//! passwords never cross this boundary.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::{LoginCredentials, PasswordDigest, Registration, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential store adapters.
    pub enum CredentialStoreError {
        /// The username or email is already registered.
        DuplicateKey => "username or email already exists",
        /// The store could not be reached.
        Connection { message: String } => "credential store connection failed: {message}",
        /// A query or insert failed while executing.
        Query { message: String } => "credential store query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Create a user. Fails with [`CredentialStoreError::DuplicateKey`] and
    /// leaves state unchanged when either the username or email is taken.
    async fn register(&self, registration: &Registration) -> Result<(), CredentialStoreError>;

    /// True iff the user exists and the stored digest matches.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<bool, CredentialStoreError>;
}

#[derive(Debug)]
struct StoredAccount {
    email: String,
    digest: PasswordDigest,
}

/// Process-local credential store for tests and demos.
///
/// # Examples
/// ```
/// use finsight::domain::ports::{CredentialStore, InMemoryCredentialStore};
/// use finsight::domain::{LoginCredentials, Registration};
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = InMemoryCredentialStore::default();
/// let signup = Registration::try_from_parts("ada", "ada@example.com", "pw", "pw").expect("signup");
/// store.register(&signup).await.expect("registered");
/// let login = LoginCredentials::try_from_parts("ada", "pw").expect("login");
/// assert!(store.authenticate(&login).await.expect("lookup"));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    accounts: Mutex<HashMap<Username, StoredAccount>>,
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn register(&self, registration: &Registration) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        let email = registration.email().as_ref();
        if accounts.contains_key(registration.username())
            || accounts.values().any(|account| account.email == email)
        {
            return Err(CredentialStoreError::duplicate_key());
        }
        accounts.insert(
            registration.username().clone(),
            StoredAccount {
                email: email.to_owned(),
                digest: registration.password_digest().clone(),
            },
        );
        Ok(())
    }

    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<bool, CredentialStoreError> {
        let accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(accounts
            .get(credentials.username())
            .is_some_and(|account| account.digest == credentials.password_digest()))
    }
}
