//! OpenAPI documentation for the REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::growth::GrowthPoint;
use crate::domain::{AssetClass, ClassSummary, Error, ErrorCode, Holding};
use crate::inbound::http::about::AboutResponse;
use crate::inbound::http::accounts::{AccountResponse, LoginRequest, SignupRequest};
use crate::inbound::http::holdings::AddHoldingRequest;
use crate::inbound::http::insights::{
    AnalyticsResponse, DashboardResponse, Prediction, PredictionResponse,
};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "FinSight API",
        description = "Portfolio tracking with allocation analytics, advice, and value projections."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::holdings::list_holdings,
        crate::inbound::http::holdings::add_holding,
        crate::inbound::http::holdings::delete_holding,
        crate::inbound::http::holdings::export_holdings,
        crate::inbound::http::insights::dashboard,
        crate::inbound::http::insights::analytics,
        crate::inbound::http::insights::predictions,
        crate::inbound::http::about::about,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        AssetClass,
        Holding,
        ClassSummary,
        GrowthPoint,
        SignupRequest,
        LoginRequest,
        AccountResponse,
        AddHoldingRequest,
        DashboardResponse,
        AnalyticsResponse,
        Prediction,
        PredictionResponse,
        AboutResponse,
    )),
    tags(
        (name = "accounts", description = "Signup and session management"),
        (name = "holdings", description = "Recorded assets and CSV export"),
        (name = "insights", description = "Dashboard, analytics, and predictions"),
        (name = "about", description = "Product information"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
