pub mod auth;
pub mod events;
pub mod users;

use axum::{Router, middleware};

use crate::AppState;
use crate::auth::require_auth;

/// Everything mounted under `/api`: the public auth group plus the token-gated groups.
pub fn api_router() -> Router<AppState> {
    let protected = Router::new()
        .merge(events::routes())
        .merge(users::routes())
        .route_layer(middleware::from_fn(require_auth));

    Router::new().merge(auth::routes()).merge(protected)
}
