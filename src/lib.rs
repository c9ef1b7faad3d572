pub mod auth;
pub mod cors;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod settings;

use std::net::SocketAddr;

use axum::{Router, http::HeaderValue, routing::get};
use handlers::{healthz_live, healthz_ready};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::settings::{DEFAULT_ALLOWED_ORIGIN, Settings};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let state = AppState {
        settings: settings.clone(),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("Starting SportsMate API on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let allowed_origin = state.settings.origin_header().unwrap_or_else(|err| {
        warn!("{err}; falling back to {DEFAULT_ALLOWED_ORIGIN}");
        HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)
    });

    let mut router = Router::new()
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .nest("/api", routes::api_router())
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    cors::apply(router, allowed_origin).layer(trace_layer)
}
