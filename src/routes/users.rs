use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{ErrorResponse, NearbyQuery, User};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(current_user).put(update_profile))
        .route("/users/nearby", get(nearby_users))
        .route("/users/{id}", get(user_profile))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn current_user() -> Json<User> {
    Json(User::default())
}

#[utoipa::path(
    put,
    path = "/api/users/me",
    request_body = User,
    responses(
        (status = 200, description = "Updated profile", body = User),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_profile(JsonBody(profile): JsonBody<User>) -> Result<Json<User>, ApiError> {
    debug!(id = %profile.id, "update profile");
    Ok(Json(profile))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn user_profile(Path(id): Path<String>) -> Json<User> {
    Json(User {
        id,
        ..Default::default()
    })
}

#[utoipa::path(
    get,
    path = "/api/users/nearby",
    params(NearbyQuery),
    responses(
        (status = 200, description = "Users near the given point", body = [User]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn nearby_users(Query(query): Query<NearbyQuery>) -> Json<Vec<User>> {
    debug!(lat = ?query.lat, lng = ?query.lng, "nearby users");
    Json(Vec::new())
}
