//! Read-only portfolio views: dashboard, analytics, and predictions.
//!
//! Every view reloads the full snapshot and recomputes from it.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::growth::{GrowthPoint, growth_trend};
use crate::domain::portfolio::{self, ClassSummary, round_cents};
use crate::domain::projector::{
    self, DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS, growth_percentage, trajectory,
};
use crate::domain::tips::random_tip;
use crate::domain::{Advice, Error, Holding, Username, advise};
use crate::inbound::http::ApiResult;
use crate::inbound::http::port_errors::map_holdings_store_error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Shown under every dashboard.
pub const DISCLAIMER: &str = "FinSight is an educational tool for portfolio tracking and analysis. \
Predictions are based on historical-like simulated data and should not be considered as financial advice. \
Always consult with a certified financial advisor before making investment decisions.";

async fn load_snapshot(
    state: &HttpState,
    session: &SessionContext,
) -> Result<(Username, Vec<Holding>), Error> {
    let owner = session.require_username()?;
    let snapshot = state
        .holdings
        .list(&owner)
        .await
        .map_err(map_holdings_store_error)?;
    Ok((owner, snapshot))
}

/// Dashboard metrics.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub username: String,
    pub total_value: f64,
    pub holding_count: usize,
    pub average_value: f64,
    pub holdings: Vec<Holding>,
    pub tip: String,
    pub disclaimer: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardResponse),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["insights"],
    operation_id = "dashboard"
)]
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardResponse>> {
    let (owner, snapshot) = load_snapshot(&state, &session).await?;
    Ok(web::Json(DashboardResponse {
        username: owner.to_string(),
        total_value: portfolio::total(&snapshot),
        holding_count: snapshot.len(),
        average_value: portfolio::average(&snapshot),
        holdings: snapshot,
        tip: random_tip().to_owned(),
        disclaimer: DISCLAIMER.to_owned(),
    }))
}

/// Analytics view body.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_value: f64,
    pub breakdown: Vec<ClassSummary>,
    pub growth_trend: Vec<GrowthPoint>,
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics",
    responses(
        (status = 200, description = "Per-class breakdown and growth trend", body = AnalyticsResponse),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["insights"],
    operation_id = "analytics"
)]
#[get("/analytics")]
pub async fn analytics(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<AnalyticsResponse>> {
    let (_, snapshot) = load_snapshot(&state, &session).await?;
    let total = portfolio::total(&snapshot);
    if snapshot.is_empty() {
        return Ok(web::Json(AnalyticsResponse {
            total_value: total,
            breakdown: Vec::new(),
            growth_trend: Vec::new(),
        }));
    }

    let breakdown = portfolio::breakdown(&snapshot)
        .into_iter()
        .map(|row| ClassSummary {
            total_value: round_cents(row.total_value),
            average_value: round_cents(row.average_value),
            percentage: round_cents(row.percentage),
            ..row
        })
        .collect();
    Ok(web::Json(AnalyticsResponse {
        total_value: total,
        breakdown,
        growth_trend: growth_trend(total),
    }))
}

/// Query string for the predictions view.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PredictionQuery {
    /// Whole years in `1..=20`; defaults to 5.
    #[param(value_type = Option<u32>, example = 5)]
    pub years: Option<String>,
}

fn parse_years(raw: Option<&str>) -> Result<u32, Error> {
    let Some(text) = raw else {
        return Ok(DEFAULT_HORIZON_YEARS);
    };
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|years| (1..=MAX_HORIZON_YEARS).contains(years))
        .ok_or_else(|| {
            Error::invalid_request(format!("years must be a whole number from 1 to {MAX_HORIZON_YEARS}"))
                .with_details(json!({ "field": "years", "value": text, "code": "out_of_range" }))
        })
}

/// Forecast figures, present only when the portfolio has value.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub predicted_value: f64,
    pub growth_percentage: f64,
    /// Year-by-year path from today's value to the prediction.
    pub trajectory: Vec<f64>,
}

/// Predictions view body.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub years: u32,
    pub current_value: f64,
    pub prediction: Option<Prediction>,
    #[schema(value_type = Vec<String>)]
    pub advice: Vec<Advice>,
}

#[utoipa::path(
    get,
    path = "/api/v1/predictions",
    params(PredictionQuery),
    responses(
        (status = 200, description = "Forecast and advice", body = PredictionResponse),
        (status = 400, description = "Horizon out of range", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["insights"],
    operation_id = "predictions"
)]
#[get("/predictions")]
pub async fn predictions(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PredictionQuery>,
) -> ApiResult<web::Json<PredictionResponse>> {
    let (_, snapshot) = load_snapshot(&state, &session).await?;
    let years = parse_years(query.years.as_deref())?;
    let current = portfolio::total(&snapshot);
    let advice = advise(&snapshot, current);

    let prediction = (current > 0.0).then(|| {
        let predicted = projector::project(current, years);
        Prediction {
            predicted_value: predicted,
            growth_percentage: growth_percentage(current, predicted),
            trajectory: trajectory(current, predicted, years),
        }
    });

    Ok(web::Json(PredictionResponse {
        years,
        current_value: current,
        prediction,
        advice,
    }))
}

#[cfg(test)]
mod tests;
