//! Shared validation error builders for inbound HTTP adapters.
//!
//! Every validation failure is a `400 invalid_request` whose `details`
//! names the offending field and a stable snake-case code.

use serde_json::json;

use crate::domain::{
    Error, HoldingValidationError, LoginValidationError, SignupValidationError,
};

/// JSON field name as the client sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

/// Build a field-scoped validation error.
pub(crate) fn field_error(field: FieldName, code: &'static str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.0,
        "code": code,
    }))
}

pub(crate) fn map_login_validation_error(err: LoginValidationError) -> Error {
    let (field, code) = match err {
        LoginValidationError::EmptyUsername => ("username", "empty_username"),
        LoginValidationError::EmptyPassword => ("password", "empty_password"),
    };
    field_error(FieldName::new(field), code, err.to_string())
}

pub(crate) fn map_signup_validation_error(err: SignupValidationError) -> Error {
    let (field, code) = match err {
        SignupValidationError::EmptyUsername => ("username", "empty_username"),
        SignupValidationError::EmptyEmail => ("email", "empty_email"),
        SignupValidationError::EmptyPassword => ("password", "empty_password"),
        SignupValidationError::EmptyConfirmation => ("confirmPassword", "empty_confirmation"),
        SignupValidationError::PasswordMismatch => ("confirmPassword", "password_mismatch"),
    };
    field_error(FieldName::new(field), code, err.to_string())
}

pub(crate) fn map_holding_validation_error(err: HoldingValidationError) -> Error {
    let (field, code) = match &err {
        HoldingValidationError::EmptyAssetName => ("assetName", "empty_asset_name"),
        HoldingValidationError::NonPositiveValue => ("value", "non_positive_value"),
        HoldingValidationError::UnknownAssetClass(_) => ("assetClass", "unknown_asset_class"),
    };
    field_error(FieldName::new(field), code, err.to_string())
}
