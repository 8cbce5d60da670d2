//! Handler tests for signup, login, and logout.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    CredentialStoreError, InMemoryHoldingsStore, MockCredentialStore,
};
use crate::inbound::http::test_utils::{FixedClock, in_memory_state, test_session_middleware};

fn app_for(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .wrap(test_session_middleware())
            .service(signup)
            .service(login)
            .service(logout),
    )
}

fn signup_body(username: &str, email: &str, password: &str, confirmation: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": password,
        "confirmPassword": confirmation,
    })
}

#[actix_web::test]
async fn signup_then_login_sets_a_session_cookie() {
    let app = test::init_service(app_for(in_memory_state())).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(signup_body("ada", "ada@example.com", "pw", "pw"))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert!(
        created.response().cookies().all(|cookie| cookie.name() != "session"),
        "signup must not sign the user in"
    );

    let logged_in = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "ada", "password": "pw" }))
            .to_request(),
    )
    .await;
    assert_eq!(logged_in.status(), StatusCode::OK);
    assert!(logged_in.response().cookies().any(|cookie| cookie.name() == "session"));
    let body: Value = test::read_body_json(logged_in).await;
    assert_eq!(body, json!({ "username": "ada" }));
}

#[actix_web::test]
async fn duplicate_signup_is_a_conflict() {
    let app = test::init_service(app_for(in_memory_state())).await;
    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/signup")
                .set_json(signup_body("ada", "ada@example.com", "pw", "pw"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }
}

#[rstest]
#[case(signup_body("", "a@b.c", "pw", "pw"), "username")]
#[case(signup_body("ada", "", "pw", "pw"), "email")]
#[case(signup_body("ada", "a@b.c", "pw", "wp"), "confirmPassword")]
#[actix_web::test]
async fn invalid_signup_names_the_field(#[case] body: Value, #[case] field: &str) {
    let app = test::init_service(app_for(in_memory_state())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/v1/signup").set_json(body).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = test::read_body_json(res).await;
    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(payload["details"]["field"], field);
}

#[rstest]
#[case(json!({ "username": "ada", "password": "wrong" }), StatusCode::UNAUTHORIZED)]
#[case(json!({ "username": "nobody", "password": "pw" }), StatusCode::UNAUTHORIZED)]
#[case(json!({ "username": " ", "password": "pw" }), StatusCode::BAD_REQUEST)]
#[case(json!({ "username": "ada", "password": "" }), StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn rejected_logins(#[case] body: Value, #[case] expected: StatusCode) {
    let app = test::init_service(app_for(in_memory_state())).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(signup_body("ada", "ada@example.com", "pw", "pw"))
            .to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/v1/login").set_json(body).to_request(),
    )
    .await;
    assert_eq!(res.status(), expected);
    assert!(res.response().cookies().all(|cookie| cookie.name() != "session"));
}

#[actix_web::test]
async fn store_outage_during_login_is_service_unavailable() {
    let mut credentials = MockCredentialStore::new();
    credentials
        .expect_authenticate()
        .times(1)
        .returning(|_| Err(CredentialStoreError::connection("pool timed out")));
    let state = HttpState::new(
        Arc::new(credentials),
        Arc::new(InMemoryHoldingsStore::default()),
        Arc::new(FixedClock),
    );
    let app = test::init_service(app_for(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "ada", "password": "pw" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn store_query_failure_during_signup_is_redacted() {
    let mut credentials = MockCredentialStore::new();
    credentials
        .expect_register()
        .returning(|_| Err(CredentialStoreError::query("disk I/O error at page 7")));
    let state = HttpState::new(
        Arc::new(credentials),
        Arc::new(InMemoryHoldingsStore::default()),
        Arc::new(FixedClock),
    );
    let app = test::init_service(app_for(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(signup_body("ada", "ada@example.com", "pw", "pw"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = test::read_body_json(res).await;
    assert_eq!(payload["message"], "Internal server error");
}

#[actix_web::test]
async fn logout_without_a_session_still_succeeds() {
    let app = test::init_service(app_for(in_memory_state())).await;
    let res =
        test::call_service(&app, test::TestRequest::post().uri("/api/v1/logout").to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}
