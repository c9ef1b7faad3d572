use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::models::{ErrorResponse, Event, MessageResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/join", post(join_event))
        .route("/events/{id}/leave", post(leave_event))
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List of events", body = [Event]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "events"
)]
pub async fn list_events() -> Json<Vec<Event>> {
    Json(Vec::new())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = Event,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "events"
)]
pub async fn create_event(
    JsonBody(event): JsonBody<Event>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    debug!(title = %event.title, "create event");
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "events"
)]
pub async fn get_event(Path(id): Path<String>) -> Json<Event> {
    Json(Event {
        id,
        ..Default::default()
    })
}

/// The path id always wins over any `id` in the body.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    request_body = Event,
    responses(
        (status = 200, description = "Updated event", body = Event),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "events"
)]
pub async fn update_event(
    Path(id): Path<String>,
    JsonBody(mut event): JsonBody<Event>,
) -> Result<Json<Event>, ApiError> {
    debug!(%id, "update event");
    event.id = id;
    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "events"
)]
pub async fn delete_event(Path(id): Path<String>) -> Json<MessageResponse> {
    debug!(%id, "delete event");
    Json(MessageResponse::new("Event deleted"))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/join",
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Joined", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "events"
)]
pub async fn join_event(Path(id): Path<String>) -> Json<MessageResponse> {
    debug!(%id, "join event");
    Json(MessageResponse::new("Joined event"))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/leave",
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Left", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "events"
)]
pub async fn leave_event(Path(id): Path<String>) -> Json<MessageResponse> {
    debug!(%id, "leave event");
    Json(MessageResponse::new("Left event"))
}
