//! Handler tests for the dashboard, analytics, and predictions views.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{App, HttpResponse, web};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::ports::{HoldingsStore, InMemoryCredentialStore, InMemoryHoldingsStore};
use crate::domain::tips::FINANCIAL_TIPS;
use crate::domain::{AssetClass, NewHolding};
use crate::inbound::http::test_utils::{FixedClock, session_cookie, test_session_middleware};

async fn sign_in_as_ada(session: SessionContext) -> ApiResult<HttpResponse> {
    session.persist_username(&Username::new("ada").map_err(|err| Error::internal(err.to_string()))?)?;
    Ok(HttpResponse::Ok().finish())
}

async fn seeded_state(entries: &[(&str, AssetClass, f64)]) -> HttpState {
    let holdings = InMemoryHoldingsStore::default();
    let owner = Username::new("ada").expect("username");
    for &(name, class, value) in entries {
        let holding = NewHolding::try_new(name, class, value).expect("valid holding");
        holdings.add(&owner, &holding).await.expect("seed holding");
    }
    HttpState::new(
        Arc::new(InMemoryCredentialStore::default()),
        Arc::new(holdings),
        Arc::new(FixedClock),
    )
}

macro_rules! insights_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new().app_data(web::Data::new($state)).service(
                web::scope("/api/v1")
                    .wrap(test_session_middleware())
                    .route("/test-login", web::post().to(sign_in_as_ada))
                    .service(dashboard)
                    .service(analytics)
                    .service(predictions),
            ),
        )
        .await
    };
}

async fn login<S>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post().uri("/api/v1/test-login").to_request(),
    )
    .await;
    session_cookie(&res)
}

async fn get_json<S>(app: &S, uri: &str, cookie: Cookie<'static>) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).cookie(cookie).to_request()).await;
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

const STOCK_AND_GOLD: &[(&str, AssetClass, f64)] = &[
    ("Index Fund", AssetClass::Stock, 100_000.0),
    ("Gold ETF", AssetClass::Gold, 3_000.0),
];

#[actix_web::test]
async fn dashboard_reports_totals_and_a_known_tip() {
    let app = insights_app!(seeded_state(STOCK_AND_GOLD).await);
    let cookie = login(&app).await;

    let (status, body) = get_json(&app, "/api/v1/dashboard", cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "ada");
    assert_eq!(body["totalValue"], 103_000.0);
    assert_eq!(body["holdingCount"], 2);
    assert_eq!(body["averageValue"], 51_500.0);
    assert_eq!(body["holdings"].as_array().map(Vec::len), Some(2));
    let tip = body["tip"].as_str().expect("tip");
    assert!(FINANCIAL_TIPS.contains(&tip));
    assert_eq!(body["disclaimer"], DISCLAIMER);
}

#[actix_web::test]
async fn empty_dashboard_is_all_zeroes() {
    let app = insights_app!(seeded_state(&[]).await);
    let cookie = login(&app).await;
    let (_, body) = get_json(&app, "/api/v1/dashboard", cookie).await;
    assert_eq!(body["totalValue"], 0.0);
    assert_eq!(body["averageValue"], 0.0);
    assert_eq!(body["holdingCount"], 0);
}

#[actix_web::test]
async fn analytics_rounds_breakdown_to_cents() {
    let app = insights_app!(seeded_state(STOCK_AND_GOLD).await);
    let cookie = login(&app).await;

    let (status, body) = get_json(&app, "/api/v1/analytics", cookie).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["breakdown"].as_array().expect("breakdown rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["assetClass"], "Gold");
    assert_eq!(rows[0]["percentage"], 2.91);
    assert_eq!(rows[1]["assetClass"], "Stock");
    assert_eq!(rows[1]["percentage"], 97.09);
    assert_eq!(rows[1]["count"], 1);

    let trend = body["growthTrend"].as_array().expect("growth trend");
    assert_eq!(trend.len(), 12);
    assert_eq!(trend[0]["month"], "Jan");
    let first = trend[0]["value"].as_f64().expect("first value");
    assert!((first - 72_100.0).abs() < 1e-6, "{first}");
}

#[actix_web::test]
async fn analytics_for_an_empty_portfolio_is_empty() {
    let app = insights_app!(seeded_state(&[]).await);
    let cookie = login(&app).await;
    let (_, body) = get_json(&app, "/api/v1/analytics", cookie).await;
    assert_eq!(body["breakdown"], Value::Array(Vec::new()));
    assert_eq!(body["growthTrend"], Value::Array(Vec::new()));
}

#[actix_web::test]
async fn predictions_default_to_five_years_with_advice() {
    let app = insights_app!(seeded_state(STOCK_AND_GOLD).await);
    let cookie = login(&app).await;

    let (status, body) = get_json(&app, "/api/v1/predictions", cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["years"], 5);
    assert_eq!(body["currentValue"], 103_000.0);

    let predicted = body["prediction"]["predictedValue"].as_f64().expect("predicted value");
    assert!(predicted >= 0.8 * 103_000.0);
    let trajectory = body["prediction"]["trajectory"].as_array().expect("trajectory");
    assert_eq!(trajectory.len(), 6);
    assert_eq!(trajectory[0], 103_000.0);

    let advice: Vec<&str> = body["advice"]
        .as_array()
        .expect("advice")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        advice,
        [
            Advice::LowDiversification.message(),
            Advice::ConcentratedPosition.message(),
            Advice::AddGoldHedge.message(),
        ]
    );
}

#[actix_web::test]
async fn predictions_for_an_empty_portfolio_only_advise() {
    let app = insights_app!(seeded_state(&[]).await);
    let cookie = login(&app).await;
    let (status, body) = get_json(&app, "/api/v1/predictions?years=3", cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["prediction"].is_null());
    assert_eq!(body["advice"][0], Advice::StartBuilding.message());
    assert_eq!(body["advice"].as_array().map(Vec::len), Some(1));
}

#[rstest]
#[case("0")]
#[case("21")]
#[case("-1")]
#[case("five")]
#[case("2.5")]
#[actix_web::test]
async fn out_of_range_horizons_are_rejected(#[case] years: &str) {
    let app = insights_app!(seeded_state(STOCK_AND_GOLD).await);
    let cookie = login(&app).await;
    let (status, body) = get_json(&app, &format!("/api/v1/predictions?years={years}"), cookie).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "years");
}

#[rstest]
#[case("/api/v1/dashboard")]
#[case("/api/v1/analytics")]
#[case("/api/v1/predictions")]
#[case("/api/v1/predictions?years=0")]
#[case("/api/v1/predictions?years=five")]
#[actix_web::test]
async fn views_require_a_session(#[case] uri: &str) {
    let app = insights_app!(seeded_state(&[]).await);
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case(None, 5)]
#[case(Some("1"), 1)]
#[case(Some(" 20 "), 20)]
fn horizon_parsing(#[case] raw: Option<&str>, #[case] expected: u32) {
    assert_eq!(parse_years(raw).expect("valid horizon"), expected);
}
