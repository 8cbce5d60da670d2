//! Static product description served to the About view.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::AssetClass;

const SUMMARY: &str = "FinSight helps you track, analyse, and forecast an investment portfolio \
across stocks, crypto, mutual funds, real estate, and gold.";

const FEATURES: [&str; 6] = [
    "Account signup and login",
    "Multi-asset portfolio management",
    "Per-class allocation analytics",
    "Portfolio value predictions",
    "Diversification advice and financial tips",
    "CSV export of holdings",
];

/// About view body.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    #[schema(example = "FinSight")]
    pub name: &'static str,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    pub summary: &'static str,
    pub features: Vec<&'static str>,
    pub asset_classes: Vec<AssetClass>,
}

impl AboutResponse {
    fn current() -> Self {
        Self {
            name: "FinSight",
            version: env!("CARGO_PKG_VERSION"),
            summary: SUMMARY,
            features: FEATURES.to_vec(),
            asset_classes: AssetClass::ALL.to_vec(),
        }
    }
}

/// Describe the product. No session required.
#[utoipa::path(
    get,
    path = "/api/v1/about",
    responses((status = 200, description = "Product description", body = AboutResponse)),
    tags = ["about"],
    operation_id = "about"
)]
#[get("/about")]
pub async fn about() -> web::Json<AboutResponse> {
    web::Json(AboutResponse::current())
}
