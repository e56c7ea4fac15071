//! Account and session HTTP handlers.
//!
//! ```text
//! POST /api/v1/users  {"email":"ada@example.com","password":"hunter2"}
//! POST /api/v1/login  {"email":"ada@example.com","password":"hunter2"}
//! POST /api/v1/logout
//! ```

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{LoginCredentials, Registration};
use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Request body shared by registration and login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsBody {
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "hunter2")]
    pub password: String,
}

/// Response body identifying the session's user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserBody {
    /// The authenticated user's id.
    pub id: UserId,
}

/// Create an account and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CredentialsBody,
    responses(
        (status = 201, description = "Account created", body = SessionUserBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/users")]
pub async fn register(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let registration = Registration::try_from_parts(payload.email, payload.password)?;
    let id = state.onboarding.register(&registration).await?;
    session.persist_user(id)?;
    Ok(HttpResponse::Created().json(SessionUserBody { id }))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialsBody,
    responses(
        (status = 200, description = "Login success", body = SessionUserBody,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(payload.email, payload.password)?;
    let id = state.login.authenticate(&credentials).await?;
    session.persist_user(id)?;
    Ok(HttpResponse::Ok().json(SessionUserBody { id }))
}

/// Invalidate the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}
