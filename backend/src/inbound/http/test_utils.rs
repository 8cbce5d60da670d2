//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{InMemoryCredentialStore, InMemoryHoldingsStore};
use crate::inbound::http::state::HttpState;

/// Session middleware with a fresh key, cookie name `session`, and the
/// `Secure` flag off for plain-HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by `response`.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Clock pinned to 2026-03-14T09:26:53Z.
pub struct FixedClock;

impl FixedClock {
    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
            .single()
            .expect("valid fixture timestamp")
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        Self::instant().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::instant()
    }
}

/// HTTP state over in-memory stores and the fixed clock.
pub fn in_memory_state() -> HttpState {
    HttpState::new(
        Arc::new(InMemoryCredentialStore::default()),
        Arc::new(InMemoryHoldingsStore::default()),
        Arc::new(FixedClock),
    )
}
