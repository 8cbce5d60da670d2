//! Holdings CRUD and CSV export for the signed-in user.

use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::domain::export::{export_filename, render_csv};
use crate::domain::{AssetClass, Error, Holding, HoldingId, NewHolding};
use crate::inbound::http::ApiResult;
use crate::inbound::http::port_errors::map_holdings_store_error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_holding_validation_error;

/// Add-asset form body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddHoldingRequest {
    #[schema(example = "Apple Stock")]
    pub asset_name: String,
    /// One of the fixed class labels, e.g. `Mutual Fund`.
    #[schema(example = "Stock")]
    pub asset_class: String,
    #[schema(example = 150000.0)]
    pub value: f64,
}

impl AddHoldingRequest {
    fn validate(&self) -> Result<NewHolding, Error> {
        let class = self
            .asset_class
            .parse::<AssetClass>()
            .map_err(map_holding_validation_error)?;
        NewHolding::try_new(&self.asset_name, class, self.value).map_err(map_holding_validation_error)
    }
}

/// List the signed-in user's holdings, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/holdings",
    responses(
        (status = 200, description = "Holdings", body = [Holding]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["holdings"],
    operation_id = "listHoldings"
)]
#[get("/holdings")]
pub async fn list_holdings(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Holding>>> {
    let owner = session.require_username()?;
    let snapshot = state
        .holdings
        .list(&owner)
        .await
        .map_err(map_holdings_store_error)?;
    Ok(web::Json(snapshot))
}

/// Record a new holding.
#[utoipa::path(
    post,
    path = "/api/v1/holdings",
    request_body = AddHoldingRequest,
    responses(
        (status = 201, description = "Holding added"),
        (status = 400, description = "Invalid asset", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["holdings"],
    operation_id = "addHolding"
)]
#[post("/holdings")]
pub async fn add_holding(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AddHoldingRequest>,
) -> ApiResult<HttpResponse> {
    let owner = session.require_username()?;
    let holding = payload.validate()?;
    state
        .holdings
        .add(&owner, &holding)
        .await
        .map_err(map_holdings_store_error)?;
    info!(username = %owner, asset_class = %holding.asset_class(), "holding added");
    Ok(HttpResponse::Created().finish())
}

/// Delete a holding by id.
///
/// Ownership is not checked and unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/api/v1/holdings/{id}",
    params(("id" = i64, Path, description = "Holding id")),
    responses(
        (status = 204, description = "Holding removed or never existed"),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["holdings"],
    operation_id = "deleteHolding"
)]
#[delete("/holdings/{id}")]
pub async fn delete_holding(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let username = session.require_username()?;
    let id = HoldingId::new(path.into_inner());
    state
        .holdings
        .delete(id)
        .await
        .map_err(map_holdings_store_error)?;
    debug!(%username, %id, "holding delete requested");
    Ok(HttpResponse::NoContent().finish())
}

/// Download the signed-in user's holdings as CSV.
#[utoipa::path(
    get,
    path = "/api/v1/holdings/export",
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String,
            headers(("Content-Disposition" = String, description = "Attachment filename"))),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["holdings"],
    operation_id = "exportHoldings"
)]
#[get("/holdings/export")]
pub async fn export_holdings(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let owner = session.require_username()?;
    let snapshot = state
        .holdings
        .list(&owner)
        .await
        .map_err(map_holdings_store_error)?;
    let body = render_csv(&snapshot).map_err(|err| Error::internal(err.to_string()))?;
    let filename = export_filename(&owner, state.clock.utc());

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/csv; charset=utf-8"))
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(body))
}
