use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;

use crate::AppState;
use crate::auth::extract_token;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{Credentials, ErrorResponse, MessageResponse, User, VerifyResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/verify", get(verify))
}

// Registration, login and logout are owned by the hosted auth provider;
// these endpoints only acknowledge well-formed requests.

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = User,
    responses(
        (status = 200, description = "Registration accepted", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    JsonBody(user): JsonBody<User>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(email = %user.email, "register");
    Ok(Json(MessageResponse::new("Registration successful")))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login accepted", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(email = %credentials.email, "login");
    Ok(Json(MessageResponse::new("Login successful")))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Logged out", body = MessageResponse)),
    tag = "auth"
)]
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logout successful"))
}

/// Only checks that a token was sent; the sentinel value is not rejected here.
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Token present", body = VerifyResponse),
        (status = 401, description = "No token provided", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn verify(headers: HeaderMap) -> Result<Json<VerifyResponse>, ApiError> {
    if extract_token(&headers).is_none() {
        return Err(ApiError::Unauthorized("No token provided".into()));
    }
    Ok(Json(VerifyResponse { valid: true }))
}
