//! SQLite-backed `CredentialStore` using Diesel.
//!
//! Uniqueness of username and email is enforced by the table constraints; a
//! violation surfaces as `DuplicateKey` and the insert has no effect.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CredentialStore, CredentialStoreError};
use crate::domain::{LoginCredentials, PasswordDigest, Registration};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewUserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the credential store port.
#[derive(Clone)]
pub struct DieselCredentialStore {
    pool: DbPool,
}

impl DieselCredentialStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CredentialStoreError {
    map_basic_pool_error(error, |message| CredentialStoreError::connection(message))
}

fn map_diesel_error(error: DieselError) -> CredentialStoreError {
    if matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    ) {
        return CredentialStoreError::duplicate_key();
    }
    map_basic_diesel_error(
        error,
        CredentialStoreError::query,
        CredentialStoreError::connection,
    )
}

#[async_trait]
impl CredentialStore for DieselCredentialStore {
    async fn register(&self, registration: &Registration) -> Result<(), CredentialStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            username: registration.username().as_ref(),
            email: registration.email().as_ref(),
            password_hash: registration.password_digest().as_str(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<bool, CredentialStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let stored: Option<String> = users::table
            .filter(users::username.eq(credentials.username().as_ref()))
            .select(users::password_hash)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(stored
            .map(PasswordDigest::from_stored)
            .is_some_and(|digest| digest == credentials.password_digest()))
    }
}
