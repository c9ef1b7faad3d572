use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    Credentials, ErrorResponse, Event, Location, MessageResponse, Sport, User, VerifyResponse,
};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::verify,
        crate::routes::events::list_events,
        crate::routes::events::create_event,
        crate::routes::events::get_event,
        crate::routes::events::update_event,
        crate::routes::events::delete_event,
        crate::routes::events::join_event,
        crate::routes::events::leave_event,
        crate::routes::users::current_user,
        crate::routes::users::update_profile,
        crate::routes::users::user_profile,
        crate::routes::users::nearby_users
    ),
    components(schemas(
        User,
        Sport,
        Location,
        Event,
        Credentials,
        MessageResponse,
        VerifyResponse,
        ErrorResponse
    )),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "events", description = "Sports meetup events"),
        (name = "users", description = "User profiles"),
        (name = "health", description = "Liveness and readiness probes")
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_api_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/register",
            "/api/events",
            "/api/events/{id}",
            "/api/events/{id}/join",
            "/api/users/nearby",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
