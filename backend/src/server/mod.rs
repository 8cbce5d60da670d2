//! HTTP server assembly.
//!
//! Everything under `/api/v1` sits behind the encrypted cookie session;
//! health probes and the debug-only Swagger UI do not.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::time::Duration;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use finsight::Trace;
#[cfg(debug_assertions)]
use finsight::doc::ApiDoc;
use finsight::inbound::http::session_config::SessionSettings;
use finsight::inbound::http::{about, accounts, health, holdings, insights};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

const API_PREFIX: &str = "/api/v1";
const SESSION_COOKIE: &str = "session";
const SESSION_TTL_HOURS: i64 = 2;

/// Cookie session carrying the signed-in username.
fn session_middleware(settings: &SessionSettings) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), settings.key.clone())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(settings.cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(settings.same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
        )
        .build()
}

fn account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::signup)
        .service(accounts::login)
        .service(accounts::logout);
}

fn holding_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(holdings::list_holdings)
        .service(holdings::add_holding)
        .service(holdings::export_holdings)
        .service(holdings::delete_holding);
}

fn insight_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(insights::dashboard)
        .service(insights::analytics)
        .service(insights::predictions)
        .service(about::about);
}

/// Construct the FinSight HTTP server and flag readiness once bound.
///
/// Stores are chosen from `config`: SQLite when a pool is attached,
/// in-memory otherwise.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<health::HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let ServerConfig {
        session, bind_addr, ..
    } = config;
    let probes = health_state.clone();

    let server = HttpServer::new(move || {
        let api = web::scope(API_PREFIX)
            .wrap(session_middleware(&session))
            .configure(account_routes)
            .configure(holding_routes)
            .configure(insight_routes);

        let app = App::new()
            .app_data(probes.clone())
            .app_data(http_state.clone())
            .wrap(Trace)
            .service(api)
            .service(health::ready)
            .service(health::live);

        #[cfg(debug_assertions)]
        let app = app
            .service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
