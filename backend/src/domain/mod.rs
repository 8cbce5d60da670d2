//! Domain primitives, pure portfolio calculations, and driven ports.
//!
//! Nothing in this module performs I/O. Adapters hand in snapshots loaded
//! through [`ports`] and render whatever the calculations return.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`Username`], [`Registration`], [`LoginCredentials`]: account inputs.
//! - [`Holding`], [`NewHolding`], [`AssetClass`]: portfolio entries.
//! - [`portfolio`], [`advisor`], [`projector`], [`growth`], [`tips`],
//!   [`export`]: calculations over a holdings snapshot.

pub mod advisor;
pub mod auth;
pub mod error;
pub mod export;
pub mod growth;
pub mod holding;
pub mod portfolio;
pub mod ports;
pub mod projector;
pub mod tips;
pub mod trace_id;
pub mod user;

pub use self::advisor::{Advice, advise};
pub use self::auth::{
    LoginCredentials, LoginValidationError, PasswordDigest, Registration, SignupValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::holding::{AssetClass, Holding, HoldingId, HoldingValidationError, NewHolding};
pub use self::portfolio::ClassSummary;
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, UserValidationError, Username};
