//! Credentials and password digests.
//!
//! Inbound adapters build [`LoginCredentials`] and [`Registration`] from raw
//! form values; both constructors reject empty fields before any store is
//! consulted. Passwords are kept in [`Zeroizing`] buffers and only leave this
//! module as a [`PasswordDigest`].
//!
//! The digest is an unsalted SHA-256 hex string, matching rows written by
//! earlier deployments of the tracker. It is not a password-hashing function.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::user::{EmailAddress, UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use finsight::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("ada", "hunter2").expect("valid credentials");
/// assert_eq!(creds.username().as_ref(), "ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let name = Username::new(username).map_err(|_| LoginValidationError::EmptyUsername)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: name,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Digest of the supplied password, ready for comparison with storage.
    pub fn password_digest(&self) -> PasswordDigest {
        PasswordDigest::of(self.password.as_str())
    }
}

/// Errors raised while validating a signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("password confirmation must not be empty")]
    EmptyConfirmation,
    #[error("passwords don't match")]
    PasswordMismatch,
}

impl From<UserValidationError> for SignupValidationError {
    fn from(value: UserValidationError) -> Self {
        match value {
            UserValidationError::EmptyUsername => Self::EmptyUsername,
            UserValidationError::EmptyEmail => Self::EmptyEmail,
        }
    }
}

/// A validated signup ready to be persisted.
///
/// The plaintext password is digested during construction and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    email: EmailAddress,
    password_digest: PasswordDigest,
}

impl Registration {
    /// Validate the four signup fields in form order.
    ///
    /// # Examples
    /// ```
    /// use finsight::domain::{Registration, SignupValidationError};
    ///
    /// let err = Registration::try_from_parts("ada", "ada@example.com", "a", "b")
    ///     .expect_err("mismatched passwords");
    /// assert_eq!(err, SignupValidationError::PasswordMismatch);
    /// ```
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, SignupValidationError> {
        let name = Username::new(username)?;
        let address = EmailAddress::new(email)?;
        if password.is_empty() {
            return Err(SignupValidationError::EmptyPassword);
        }
        if confirmation.is_empty() {
            return Err(SignupValidationError::EmptyConfirmation);
        }
        if password != confirmation {
            return Err(SignupValidationError::PasswordMismatch);
        }
        Ok(Self {
            username: name,
            email: address,
            password_digest: PasswordDigest::of(password),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }
}

/// Lowercase hex SHA-256 digest of a password (64 characters).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digest a plaintext password.
    ///
    /// # Examples
    /// ```
    /// use finsight::domain::PasswordDigest;
    ///
    /// let digest = PasswordDigest::of("password");
    /// assert_eq!(
    ///     digest.as_str(),
    ///     "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
    /// );
    /// ```
    #[must_use]
    pub fn of(password: &str) -> Self {
        Self(hex::encode(Sha256::digest(password.as_bytes())))
    }

    /// Wrap a digest loaded from storage.
    #[must_use]
    pub fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}
