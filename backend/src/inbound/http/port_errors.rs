//! Mapping from store port failures to HTTP-safe domain errors.

use serde_json::json;

use crate::domain::Error;
use crate::domain::ports::{CredentialStoreError, HoldingsStoreError};

pub(crate) fn map_credential_store_error(error: CredentialStoreError) -> Error {
    match error {
        CredentialStoreError::DuplicateKey => Error::conflict("username or email already exists")
            .with_details(json!({ "code": "duplicate_key" })),
        CredentialStoreError::Connection { message } => Error::service_unavailable(message),
        CredentialStoreError::Query { message } => Error::internal(message),
    }
}

pub(crate) fn map_holdings_store_error(error: HoldingsStoreError) -> Error {
    match error {
        HoldingsStoreError::Connection { message } => Error::service_unavailable(message),
        HoldingsStoreError::Query { message } => Error::internal(message),
    }
}
