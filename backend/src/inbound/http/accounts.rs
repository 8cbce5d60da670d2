//! Signup, login, and logout handlers.
//!
//! ```text
//! POST /api/v1/signup {"username":"ada","email":"ada@example.com","password":"pw","confirmPassword":"pw"}
//! POST /api/v1/login  {"username":"ada","password":"pw"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, Registration, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::port_errors::map_credential_store_error;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{map_login_validation_error, map_signup_validation_error};

/// Signup form body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login form body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "ada")]
    pub username: String,
    pub password: String,
}

/// Body returned after signup or login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[schema(example = "ada")]
    pub username: String,
}

impl From<&Username> for AccountResponse {
    fn from(value: &Username) -> Self {
        Self {
            username: value.to_string(),
        }
    }
}

/// Create an account. Does not sign the user in.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Missing field or mismatched passwords", body = Error),
        (status = 409, description = "Username or email already exists", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let SignupRequest {
        username,
        email,
        password,
        confirm_password,
    } = payload.into_inner();
    let registration = Registration::try_from_parts(&username, &email, &password, &confirm_password)
        .map_err(map_signup_validation_error)?;

    state
        .credentials
        .register(&registration)
        .await
        .map_err(map_credential_store_error)?;

    info!(username = %registration.username(), "account created");
    Ok(HttpResponse::Created().json(AccountResponse::from(registration.username())))
}

/// Check credentials and start a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AccountResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Missing field", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from_parts(&payload.username, &payload.password)
        .map_err(map_login_validation_error)?;

    let authenticated = state
        .credentials
        .authenticate(&credentials)
        .await
        .map_err(map_credential_store_error)?;
    if !authenticated {
        return Err(Error::unauthorized("invalid credentials"));
    }

    session.persist_username(credentials.username())?;
    Ok(HttpResponse::Ok().json(AccountResponse::from(credentials.username())))
}

/// End the session. Succeeds whether or not one exists.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["accounts"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests;
